use pretty_assertions::assert_eq;
use revassign_database_interface::DatabaseError;
use revassign_models::User;

use crate::testcase::{db_test_case, fixtures::create_backend_team};

#[tokio::test]
async fn get() {
    db_test_case("user_get", |db| async move {
        assert_eq!(db.users_get("a").await?, None);
        assert!(matches!(
            db.users_get_expect("a").await,
            Err(DatabaseError::UnknownUser(id)) if id == "a"
        ));

        create_backend_team(db.as_ref()).await?;

        assert_eq!(
            db.users_get_expect("a").await?,
            User {
                id: "a".into(),
                username: "user-a".into(),
                team_name: "backend".into(),
                is_active: true
            }
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_active_teammates_except() {
    db_test_case("user_list_active_teammates_except", |db| async move {
        create_backend_team(db.as_ref()).await?;

        let ids = |users: Vec<User>| users.into_iter().map(|u| u.id).collect::<Vec<_>>();

        assert_eq!(
            ids(db.users_list_active_teammates_except("backend", "a").await?),
            vec!["b", "c"]
        );
        assert_eq!(
            ids(db.users_list_active_teammates_except("backend", "d").await?),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            ids(db.users_list_active_teammates_except("unknown", "a").await?),
            Vec::<String>::new()
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn set_is_active() {
    db_test_case("user_set_is_active", |db| async move {
        assert!(matches!(
            db.users_set_is_active("a", false).await,
            Err(DatabaseError::UnknownUser(_))
        ));

        create_backend_team(db.as_ref()).await?;

        let user = db.users_set_is_active("a", false).await?;
        assert!(!user.is_active);
        assert!(!db.users_get_expect("a").await?.is_active);

        let user = db.users_set_is_active("d", true).await?;
        assert!(user.is_active);
        assert_eq!(
            db.users_list_active_teammates_except("backend", "b")
                .await?
                .len(),
            2
        );

        Ok(())
    })
    .await;
}
