use async_trait::async_trait;
use revassign_models::{Team, TeamMember};
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AddTeamInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        team_name: &str,
        members: &[TeamMember],
    ) -> Result<Team>;
}

#[derive(Component)]
#[shaku(interface = AddTeamInterface)]
pub(crate) struct AddTeam;

#[async_trait]
impl AddTeamInterface for AddTeam {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        team_name: &str,
        members: &[TeamMember],
    ) -> Result<Team> {
        if ctx.db_service.teams_exists(team_name).await? {
            return Err(DomainError::TeamAlreadyExists {
                name: team_name.into(),
            });
        }

        ctx.db_service
            .teams_create_with_members(team_name, members)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revassign_database_interface::DbService;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn member(id: &str, is_active: bool) -> TeamMember {
        TeamMember {
            user_id: id.into(),
            username: format!("user-{id}"),
            is_active,
        }
    }

    #[tokio::test]
    async fn run() {
        let ctx = CoreContextTest::new();

        let team = AddTeam
            .run(
                &ctx.as_context(),
                "backend",
                &[member("a", true), member("b", false)],
            )
            .await
            .unwrap();

        assert_eq!(
            team,
            Team {
                name: "backend".into(),
                members: vec![member("a", true), member("b", false)]
            }
        );
        assert_eq!(
            ctx.db_service.users_get_expect("b").await.unwrap().team_name,
            "backend"
        );
    }

    #[tokio::test]
    async fn already_exists() {
        let ctx = CoreContextTest::new();
        AddTeam
            .run(&ctx.as_context(), "backend", &[])
            .await
            .unwrap();

        assert!(matches!(
            AddTeam.run(&ctx.as_context(), "backend", &[member("a", true)]).await,
            Err(DomainError::TeamAlreadyExists { name }) if name == "backend"
        ));
        assert!(ctx.db_service.users_get("a").await.unwrap().is_none());
    }
}
