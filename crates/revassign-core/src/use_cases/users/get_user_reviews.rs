use async_trait::async_trait;
use revassign_models::PullRequestShort;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GetUserReviewsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: &str)
        -> Result<Vec<PullRequestShort>>;
}

#[derive(Component)]
#[shaku(interface = GetUserReviewsInterface)]
pub(crate) struct GetUserReviews;

#[async_trait]
impl GetUserReviewsInterface for GetUserReviews {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>> {
        if ctx.db_service.users_get(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound { id: user_id.into() });
        }

        ctx.db_service
            .pull_requests_list_for_reviewer(user_id)
            .await
            .map_err(Into::into)
    }
}
