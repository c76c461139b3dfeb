use async_trait::async_trait;
use clap::Parser;
use time::format_description::well_known::Rfc3339;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Show pull request info
#[derive(Parser)]
pub(crate) struct PullRequestShowCommand {
    /// Pull request identifier
    pull_request_id: String,
}

#[async_trait]
impl Command for PullRequestShowCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let pr = ctx
            .db_service
            .pull_requests_get_expect(&self.pull_request_id)
            .await?;

        let merged_at = match pr.merged_at {
            Some(merged_at) => merged_at.format(&Rfc3339)?,
            None => "-".into(),
        };
        let reviewers = if pr.reviewer_ids.is_empty() {
            "-".into()
        } else {
            pr.reviewer_ids.join(", ")
        };

        let mut writer = ctx.writer.write().await;
        writeln!(writer, "Pull request '{}' ({}):", pr.id, pr.name)?;
        writeln!(writer, "  author: {}", pr.author_id)?;
        writeln!(writer, "  status: {}", pr.status)?;
        writeln!(writer, "  reviewers: {}", reviewers)?;
        writeln!(writer, "  created at: {}", pr.created_at.format(&Rfc3339)?)?;
        writeln!(writer, "  merged at: {}", merged_at)?;

        Ok(())
    }
}
