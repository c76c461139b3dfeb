use async_trait::async_trait;
use revassign_models::User;
use shaku::{Component, Interface};

use crate::CoreContext;

/// Initial reviewer selection for a new pull request.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SelectReviewersInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        author_id: &str,
        eligible_pool: &[User],
    ) -> Vec<String>;
}

#[derive(Component)]
#[shaku(interface = SelectReviewersInterface)]
pub(crate) struct SelectReviewers;

#[async_trait]
impl SelectReviewersInterface for SelectReviewers {
    #[tracing::instrument(skip(self, ctx, eligible_pool), fields(pool_size = eligible_pool.len()), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        author_id: &str,
        eligible_pool: &[User],
    ) -> Vec<String> {
        let mut pool: Vec<&str> = Vec::with_capacity(eligible_pool.len());
        for user in eligible_pool {
            if user.id != author_id && !pool.contains(&user.id.as_str()) {
                pool.push(&user.id);
            }
        }

        match pool.len() {
            0 => vec![],
            1 => vec![pool[0].into()],
            n => {
                let first = ctx.random_service.gen_index(n);
                let mut second = ctx.random_service.gen_index(n - 1);
                if second >= first {
                    second += 1;
                }

                vec![pool[first].into(), pool[second].into()]
            }
        }
    }
}
