use async_trait::async_trait;
use clap::Parser;
use revassign_core::use_cases::pulls::merge_pull_request::MergePullRequestInterface;
use shaku::HasComponent;
use time::OffsetDateTime;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Merge pull request now
#[derive(Parser)]
pub(crate) struct PullRequestMergeCommand {
    /// Pull request identifier
    pull_request_id: String,
}

#[async_trait]
impl Command for PullRequestMergeCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let merge_pull_request: &dyn MergePullRequestInterface = ctx.core_module.resolve_ref();
        let pr = merge_pull_request
            .run(
                &ctx.as_core_context(),
                &self.pull_request_id,
                OffsetDateTime::now_utc(),
            )
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Pull request '{}' is {}.",
            pr.id,
            pr.status
        )?;

        Ok(())
    }
}
