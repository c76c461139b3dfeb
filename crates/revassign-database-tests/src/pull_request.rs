use pretty_assertions::assert_eq;
use revassign_database_interface::DatabaseError;
use revassign_models::{PullRequest, PullRequestShort, PullRequestStatus};
use time::macros::datetime;

use crate::testcase::{db_test_case, fixtures::create_backend_team};

fn sample(id: &str) -> PullRequest {
    PullRequest::new_open(id, "Add feature", "a", datetime!(2024-03-01 12:00 UTC))
}

#[tokio::test]
async fn create_with_reviewers() {
    db_test_case("pull_request_create_with_reviewers", |db| async move {
        create_backend_team(db.as_ref()).await?;

        assert!(!db.pull_requests_exists("pr-1").await?);
        assert_eq!(db.pull_requests_get("pr-1").await?, None);

        let pr = db
            .pull_requests_create_with_reviewers(sample("pr-1"), &["b".into(), "c".into()])
            .await?;
        assert_eq!(pr.reviewer_ids, vec!["b", "c"]);
        assert_eq!(pr.status, PullRequestStatus::Open);

        assert!(db.pull_requests_exists("pr-1").await?);
        assert_eq!(db.pull_requests_get_expect("pr-1").await?, pr);

        // Duplicated ids are refused, the first record is untouched.
        assert!(db
            .pull_requests_create_with_reviewers(sample("pr-1"), &[])
            .await
            .is_err());
        assert_eq!(db.pull_requests_get_expect("pr-1").await?, pr);

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn create_without_reviewers() {
    db_test_case("pull_request_create_without_reviewers", |db| async move {
        create_backend_team(db.as_ref()).await?;

        let pr = db
            .pull_requests_create_with_reviewers(sample("pr-1"), &[])
            .await?;
        assert!(pr.reviewer_ids.is_empty());
        assert!(db
            .pull_requests_get_expect("pr-1")
            .await?
            .reviewer_ids
            .is_empty());

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn mark_merged() {
    db_test_case("pull_request_mark_merged", |db| async move {
        create_backend_team(db.as_ref()).await?;

        assert!(matches!(
            db.pull_requests_mark_merged("pr-1", datetime!(2024-03-02 12:00 UTC))
                .await,
            Err(DatabaseError::UnknownPullRequest(_))
        ));

        db.pull_requests_create_with_reviewers(sample("pr-1"), &["b".into()])
            .await?;
        db.pull_requests_mark_merged("pr-1", datetime!(2024-03-02 12:00 UTC))
            .await?;

        let pr = db.pull_requests_get_expect("pr-1").await?;
        assert_eq!(pr.status, PullRequestStatus::Merged);
        assert_eq!(pr.merged_at, Some(datetime!(2024-03-02 12:00 UTC)));

        // Merge time is never overwritten.
        db.pull_requests_mark_merged("pr-1", datetime!(2024-03-05 12:00 UTC))
            .await?;
        assert_eq!(
            db.pull_requests_get_expect("pr-1").await?.merged_at,
            Some(datetime!(2024-03-02 12:00 UTC))
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn replace_reviewer() {
    db_test_case("pull_request_replace_reviewer", |db| async move {
        create_backend_team(db.as_ref()).await?;
        db.pull_requests_create_with_reviewers(sample("pr-1"), &["b".into()])
            .await?;

        db.pull_requests_replace_reviewer("pr-1", "b", "c").await?;
        assert_eq!(
            db.pull_requests_get_expect("pr-1").await?.reviewer_ids,
            vec!["c"]
        );

        // The slot was already swapped.
        assert!(matches!(
            db.pull_requests_replace_reviewer("pr-1", "b", "d").await,
            Err(DatabaseError::UnknownReviewer(pr, user)) if pr == "pr-1" && user == "b"
        ));
        assert_eq!(
            db.pull_requests_get_expect("pr-1").await?.reviewer_ids,
            vec!["c"]
        );

        assert!(matches!(
            db.pull_requests_replace_reviewer("pr-2", "b", "d").await,
            Err(DatabaseError::UnknownPullRequest(_))
        ));

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn replace_reviewer_on_merged() {
    db_test_case("pull_request_replace_reviewer_on_merged", |db| async move {
        create_backend_team(db.as_ref()).await?;
        db.pull_requests_create_with_reviewers(sample("pr-1"), &["b".into()])
            .await?;
        db.pull_requests_mark_merged("pr-1", datetime!(2024-03-02 12:00 UTC))
            .await?;

        assert!(matches!(
            db.pull_requests_replace_reviewer("pr-1", "b", "c").await,
            Err(DatabaseError::PullRequestMerged(_))
        ));
        assert_eq!(
            db.pull_requests_get_expect("pr-1").await?.reviewer_ids,
            vec!["b"]
        );

        Ok(())
    })
    .await;
}

#[tokio::test]
async fn list_for_reviewer() {
    db_test_case("pull_request_list_for_reviewer", |db| async move {
        create_backend_team(db.as_ref()).await?;
        assert_eq!(db.pull_requests_list_for_reviewer("b").await?, vec![]);

        db.pull_requests_create_with_reviewers(sample("pr-2"), &["b".into(), "c".into()])
            .await?;
        db.pull_requests_create_with_reviewers(sample("pr-1"), &["b".into()])
            .await?;
        db.pull_requests_create_with_reviewers(sample("pr-3"), &["c".into()])
            .await?;
        db.pull_requests_mark_merged("pr-2", datetime!(2024-03-02 12:00 UTC))
            .await?;

        assert_eq!(
            db.pull_requests_list_for_reviewer("b").await?,
            vec![
                PullRequestShort {
                    id: "pr-1".into(),
                    name: "Add feature".into(),
                    author_id: "a".into(),
                    status: PullRequestStatus::Open
                },
                PullRequestShort {
                    id: "pr-2".into(),
                    name: "Add feature".into(),
                    author_id: "a".into(),
                    status: PullRequestStatus::Merged
                },
            ]
        );

        Ok(())
    })
    .await;
}
