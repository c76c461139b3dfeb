use async_trait::async_trait;
use revassign_database_interface::DatabaseError;
use revassign_models::PullRequest;
use shaku::{Component, Interface};
use time::OffsetDateTime;

use crate::{
    lifecycle::{merge_transition, MergeTransition},
    CoreContext, DomainError, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait MergePullRequestInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<PullRequest>;
}

#[derive(Component)]
#[shaku(interface = MergePullRequestInterface)]
pub(crate) struct MergePullRequest;

#[async_trait]
impl MergePullRequestInterface for MergePullRequest {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        merged_at: OffsetDateTime,
    ) -> Result<PullRequest> {
        let pr = ctx
            .db_service
            .pull_requests_get(pr_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound { id: pr_id.into() })?;

        match merge_transition(&pr) {
            MergeTransition::AlreadyMerged => Ok(pr),
            MergeTransition::Merge => {
                ctx.db_service
                    .pull_requests_mark_merged(pr_id, merged_at)
                    .await
                    .map_err(|e| match e {
                        DatabaseError::UnknownPullRequest(id) => {
                            DomainError::PullRequestNotFound { id }
                        }
                        e => e.into(),
                    })?;

                ctx.db_service
                    .pull_requests_get(pr_id)
                    .await?
                    .ok_or_else(|| DomainError::PullRequestNotFound { id: pr_id.into() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revassign_database_interface::DbService;
    use revassign_models::PullRequestStatus;
    use time::macros::datetime;

    use super::*;
    use crate::context::tests::CoreContextTest;

    async fn arrange() -> CoreContextTest {
        let ctx = CoreContextTest::new();
        ctx.db_service
            .pull_requests_create_with_reviewers(
                PullRequest::new_open("pr-1", "Feature", "a", datetime!(2024-01-01 10:00 UTC)),
                &["b".into()],
            )
            .await
            .unwrap();
        ctx
    }

    #[tokio::test]
    async fn merge_open() {
        let ctx = arrange().await;

        let pr = MergePullRequest
            .run(&ctx.as_context(), "pr-1", datetime!(2024-01-02 10:00 UTC))
            .await
            .unwrap();

        assert_eq!(pr.status, PullRequestStatus::Merged);
        assert_eq!(pr.merged_at, Some(datetime!(2024-01-02 10:00 UTC)));
        assert_eq!(pr.reviewer_ids, vec!["b"]);
    }

    #[tokio::test]
    async fn merge_is_idempotent() {
        let ctx = arrange().await;

        let first = MergePullRequest
            .run(&ctx.as_context(), "pr-1", datetime!(2024-01-02 10:00 UTC))
            .await
            .unwrap();
        let second = MergePullRequest
            .run(&ctx.as_context(), "pr-1", datetime!(2024-01-03 10:00 UTC))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.merged_at, Some(datetime!(2024-01-02 10:00 UTC)));
    }

    #[tokio::test]
    async fn unknown_pull_request() {
        let ctx = CoreContextTest::new();

        assert!(matches!(
            MergePullRequest
                .run(&ctx.as_context(), "px-1", datetime!(2024-01-02 10:00 UTC))
                .await,
            Err(DomainError::PullRequestNotFound { id }) if id == "px-1"
        ));
    }
}
