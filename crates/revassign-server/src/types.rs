//! Wire types.

use revassign_models::{PullRequest, PullRequestShort, PullRequestStatus, Team, TeamMember, User};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Result, ServerError};

/// Reject empty required strings.
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(ServerError::bad_request(format!("{field} is required")))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct TeamMemberJson {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_active: bool,
}

impl From<TeamMember> for TeamMemberJson {
    fn from(member: TeamMember) -> Self {
        Self {
            user_id: member.user_id,
            username: member.username,
            is_active: member.is_active,
        }
    }
}

impl From<TeamMemberJson> for TeamMember {
    fn from(member: TeamMemberJson) -> Self {
        Self {
            user_id: member.user_id,
            username: member.username,
            is_active: member.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub(crate) struct TeamJson {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberJson>,
}

impl From<Team> for TeamJson {
    fn from(team: Team) -> Self {
        Self {
            team_name: team.name,
            members: team.members.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct UserJson {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl From<User> for UserJson {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            team_name: user.team_name,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PullRequestJson {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "mergedAt", with = "time::serde::rfc3339::option")]
    pub merged_at: Option<OffsetDateTime>,
}

impl From<PullRequest> for PullRequestJson {
    fn from(pr: PullRequest) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
            assigned_reviewers: pr.reviewer_ids,
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct PullRequestShortJson {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}

impl From<PullRequestShort> for PullRequestShortJson {
    fn from(pr: PullRequestShort) -> Self {
        Self {
            pull_request_id: pr.id,
            pull_request_name: pr.name,
            author_id: pr.author_id,
            status: pr.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatePullRequestJson {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub pull_request_name: String,
    #[serde(default)]
    pub author_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MergePullRequestJson {
    #[serde(default)]
    pub pull_request_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReassignReviewerJson {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub old_reviewer_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SetIsActiveJson {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamQuery {
    #[serde(default)]
    pub team_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserQuery {
    #[serde(default)]
    pub user_id: String,
}
