use pretty_assertions::assert_eq;
use revassign_models::Team;

use crate::testcase::{
    db_test_case,
    fixtures::{create_backend_team, member},
};

#[tokio::test]
async fn create_and_get() {
    db_test_case("team_create_and_get", |db| async move {
        assert!(!db.teams_exists("backend").await?);
        assert_eq!(db.teams_get("backend").await?, None);

        let team = db
            .teams_create_with_members("backend", &[member("b", true), member("a", false)])
            .await?;
        assert_eq!(
            team,
            Team {
                name: "backend".into(),
                members: vec![member("a", false), member("b", true)]
            }
        );

        assert!(db.teams_exists("backend").await?);
        assert_eq!(db.teams_get_expect("backend").await?, team);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn create_duplicate() {
    db_test_case("team_create_duplicate", |db| async move {
        create_backend_team(db.as_ref()).await?;

        assert!(db
            .teams_create_with_members("backend", &[member("z", true)])
            .await
            .is_err());

        // Nothing from the failed creation is visible.
        assert_eq!(db.users_get("z").await?, None);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn members_move_between_teams() {
    db_test_case("team_members_move", |db| async move {
        create_backend_team(db.as_ref()).await?;
        db.teams_create_with_members("frontend", &[member("a", true)])
            .await?;

        let backend = db.teams_get_expect("backend").await?;
        assert_eq!(
            backend
                .members
                .iter()
                .map(|m| m.user_id.as_str())
                .collect::<Vec<_>>(),
            vec!["b", "c", "d"]
        );
        assert_eq!(db.users_get_expect("a").await?.team_name, "frontend");

        Ok(())
    })
    .await;
}
