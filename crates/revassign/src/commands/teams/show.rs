use async_trait::async_trait;
use clap::Parser;
use revassign_core::use_cases::teams::get_team::GetTeamInterface;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show team members
#[derive(Parser)]
pub(crate) struct TeamShowCommand {
    /// Team name
    team_name: String,
}

#[async_trait]
impl Command for TeamShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let get_team: &dyn GetTeamInterface = ctx.core_module.resolve_ref();
        let team = get_team
            .run(&ctx.as_core_context(), &self.team_name)
            .await?;

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Team '{}':", team.name)?;
        if team.members.is_empty() {
            writeln!(writer, "  No members.")?;
        }
        for member in team.members {
            writeln!(
                writer,
                "  - {} ({}) [{}]",
                member.user_id,
                member.username,
                if member.is_active { "active" } else { "inactive" }
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revassign_database_interface::DbService;
    use revassign_models::TeamMember;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .teams_create_with_members(
                "backend",
                &[
                    TeamMember {
                        user_id: "a".into(),
                        username: "Alice".into(),
                        is_active: true,
                    },
                    TeamMember {
                        user_id: "b".into(),
                        username: "Bob".into(),
                        is_active: false,
                    },
                ],
            )
            .await
            .unwrap();

        assert_eq!(
            test_command(ctx, &["teams", "show", "backend"]).await,
            "Team 'backend':\n  - a (Alice) [active]\n  - b (Bob) [inactive]\n"
        );
    }

    #[tokio::test]
    async fn empty() {
        let ctx = CommandContextTest::new();
        ctx.db_service
            .teams_create_with_members("backend", &[])
            .await
            .unwrap();

        assert_eq!(
            test_command(ctx, &["teams", "show", "backend"]).await,
            "Team 'backend':\n  No members.\n"
        );
    }
}
