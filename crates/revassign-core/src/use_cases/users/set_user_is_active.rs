use async_trait::async_trait;
use revassign_database_interface::DatabaseError;
use revassign_models::User;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

/// Toggle a user's activity flag.
///
/// Existing assignments are left untouched, only future selections see it.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SetUserIsActiveInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, user_id: &str, is_active: bool)
        -> Result<User>;
}

#[derive(Component)]
#[shaku(interface = SetUserIsActiveInterface)]
pub(crate) struct SetUserIsActive;

#[async_trait]
impl SetUserIsActiveInterface for SetUserIsActive {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        user_id: &str,
        is_active: bool,
    ) -> Result<User> {
        ctx.db_service
            .users_set_is_active(user_id, is_active)
            .await
            .map_err(|e| match e {
                DatabaseError::UnknownUser(id) => DomainError::UserNotFound { id },
                e => e.into(),
            })
    }
}
