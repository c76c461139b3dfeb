use async_trait::async_trait;
use revassign_models::{PullRequest, PullRequestShort, Team, TeamMember, User};
use time::OffsetDateTime;

use crate::{DatabaseError, Result};

/// Storage boundary.
///
/// Every mutation is indivisible: `pull_requests_create_with_reviewers`,
/// `pull_requests_mark_merged`, `pull_requests_replace_reviewer` and
/// `teams_create_with_members` never leave a partial effect behind.
#[async_trait]
pub trait DbService: Send + Sync {
    async fn health_check(&self) -> Result<()>;

    async fn pull_requests_exists(&self, id: &str) -> Result<bool>;
    async fn pull_requests_create_with_reviewers(
        &self,
        instance: PullRequest,
        reviewer_ids: &[String],
    ) -> Result<PullRequest>;
    async fn pull_requests_get(&self, id: &str) -> Result<Option<PullRequest>>;
    async fn pull_requests_get_expect(&self, id: &str) -> Result<PullRequest> {
        self.pull_requests_get(id)
            .await?
            .ok_or_else(|| DatabaseError::UnknownPullRequest(id.into()))
    }
    /// Only an open pull request is updated, `merged_at` is never overwritten.
    async fn pull_requests_mark_merged(&self, id: &str, merged_at: OffsetDateTime) -> Result<()>;
    /// Fails with `UnknownReviewer` when `old_user_id` is no longer assigned,
    /// and with `PullRequestMerged` when the pull request is not open anymore.
    async fn pull_requests_replace_reviewer(
        &self,
        id: &str,
        old_user_id: &str,
        new_user_id: &str,
    ) -> Result<()>;
    async fn pull_requests_list_for_reviewer(
        &self,
        user_id: &str,
    ) -> Result<Vec<PullRequestShort>>;

    async fn teams_exists(&self, name: &str) -> Result<bool>;
    async fn teams_get(&self, name: &str) -> Result<Option<Team>>;
    async fn teams_get_expect(&self, name: &str) -> Result<Team> {
        self.teams_get(name)
            .await?
            .ok_or_else(|| DatabaseError::UnknownTeam(name.into()))
    }
    /// Members are upserted and moved to the new team.
    async fn teams_create_with_members(&self, name: &str, members: &[TeamMember])
        -> Result<Team>;

    async fn users_get(&self, id: &str) -> Result<Option<User>>;
    async fn users_get_expect(&self, id: &str) -> Result<User> {
        self.users_get(id)
            .await?
            .ok_or_else(|| DatabaseError::UnknownUser(id.into()))
    }
    /// Active members of `team_name`, other than `exclude_id`, ordered by id.
    async fn users_list_active_teammates_except(
        &self,
        team_name: &str,
        exclude_id: &str,
    ) -> Result<Vec<User>>;
    async fn users_set_is_active(&self, id: &str, value: bool) -> Result<User>;
}
