use async_trait::async_trait;
use revassign_database_interface::DatabaseError;
use revassign_models::PullRequest;
use shaku::{Component, HasComponent, Interface};

use crate::{
    lifecycle::{ensure_open, ensure_reviewer},
    use_cases::reviews::choose_replacement::ChooseReplacementInterface,
    CoreContext, DomainError, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignedPullRequest {
    pub pull_request: PullRequest,
    pub replaced_by: String,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReassignReviewerInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        old_reviewer_id: &str,
    ) -> Result<ReassignedPullRequest>;
}

#[derive(Component)]
#[shaku(interface = ReassignReviewerInterface)]
pub(crate) struct ReassignReviewer;

#[async_trait]
impl ReassignReviewerInterface for ReassignReviewer {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        old_reviewer_id: &str,
    ) -> Result<ReassignedPullRequest> {
        let pr = ctx
            .db_service
            .pull_requests_get(pr_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound { id: pr_id.into() })?;

        ensure_open(&pr)?;
        ensure_reviewer(&pr, old_reviewer_id)?;

        let old_reviewer = ctx
            .db_service
            .users_get(old_reviewer_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound {
                id: old_reviewer_id.into(),
            })?;

        // Candidates come from the old reviewer's team, not the author's.
        let teammates = ctx
            .db_service
            .users_list_active_teammates_except(&old_reviewer.team_name, &old_reviewer.id)
            .await?;

        let choose_replacement: &dyn ChooseReplacementInterface = ctx.core_module.resolve_ref();
        let replaced_by = choose_replacement
            .run(ctx, &pr, &teammates, old_reviewer_id)
            .await?;

        ctx.db_service
            .pull_requests_replace_reviewer(pr_id, old_reviewer_id, &replaced_by)
            .await
            .map_err(|e| match e {
                DatabaseError::UnknownPullRequest(id) => DomainError::PullRequestNotFound { id },
                DatabaseError::PullRequestMerged(id) => DomainError::AlreadyMerged { id },
                DatabaseError::UnknownReviewer(id, user_id) => {
                    DomainError::NotReviewer { id, user_id }
                }
                e => e.into(),
            })?;

        tracing::info!(
            pr_id = pr_id,
            old_reviewer_id = old_reviewer_id,
            replaced_by = %replaced_by,
            message = "Reviewer reassigned"
        );

        let pull_request = ctx
            .db_service
            .pull_requests_get(pr_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound { id: pr_id.into() })?;

        Ok(ReassignedPullRequest {
            pull_request,
            replaced_by,
        })
    }
}
