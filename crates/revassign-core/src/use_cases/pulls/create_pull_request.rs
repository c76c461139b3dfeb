use async_trait::async_trait;
use revassign_models::PullRequest;
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;

use crate::{
    use_cases::reviews::select_reviewers::SelectReviewersInterface, CoreContext, DomainError,
    Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CreatePullRequestInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> Result<PullRequest>;
}

#[derive(Component)]
#[shaku(interface = CreatePullRequestInterface)]
pub(crate) struct CreatePullRequest;

#[async_trait]
impl CreatePullRequestInterface for CreatePullRequest {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_id: &str,
        name: &str,
        author_id: &str,
    ) -> Result<PullRequest> {
        if ctx.db_service.pull_requests_exists(pr_id).await? {
            return Err(DomainError::PullRequestAlreadyExists { id: pr_id.into() });
        }

        let author = ctx
            .db_service
            .users_get(author_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound {
                id: author_id.into(),
            })?;

        let eligible_pool = ctx
            .db_service
            .users_list_active_teammates_except(&author.team_name, &author.id)
            .await?;

        let select_reviewers: &dyn SelectReviewersInterface = ctx.core_module.resolve_ref();
        let reviewer_ids = select_reviewers
            .run(ctx, &author.id, &eligible_pool)
            .await;

        let instance = PullRequest::new_open(pr_id, name, author_id, OffsetDateTime::now_utc());
        match ctx
            .db_service
            .pull_requests_create_with_reviewers(instance, &reviewer_ids)
            .await
        {
            Ok(pr) => Ok(pr),
            // Lost a creation race on the same id.
            Err(e) => {
                if ctx.db_service.pull_requests_exists(pr_id).await? {
                    Err(DomainError::PullRequestAlreadyExists { id: pr_id.into() })
                } else {
                    Err(e.into())
                }
            }
        }
    }
}
