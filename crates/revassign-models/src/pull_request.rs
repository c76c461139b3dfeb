use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::PullRequestStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    /// Assigned reviewers, never containing the author nor duplicates.
    pub reviewer_ids: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Set if and only if `status` is `Merged`.
    #[serde(with = "time::serde::rfc3339::option")]
    pub merged_at: Option<OffsetDateTime>,
}

impl PullRequest {
    /// Build a freshly opened pull request, without reviewers.
    pub fn new_open(
        id: impl Into<String>,
        name: impl Into<String>,
        author_id: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            author_id: author_id.into(),
            status: PullRequestStatus::Open,
            reviewer_ids: vec![],
            created_at,
            merged_at: None,
        }
    }

    pub fn with_reviewers(mut self, reviewer_ids: Vec<String>) -> Self {
        self.reviewer_ids = reviewer_ids;
        self
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    pub fn has_reviewer(&self, user_id: &str) -> bool {
        self.reviewer_ids.iter().any(|r| r == user_id)
    }

    pub fn to_short(&self) -> PullRequestShort {
        PullRequestShort {
            id: self.id.clone(),
            name: self.name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

/// Pull request without reviewers nor timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestShort {
    pub id: String,
    pub name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn new_open() {
        let pr = PullRequest::new_open("pr-1", "Fix", "a", datetime!(2024-01-01 10:00 UTC))
            .with_reviewers(vec!["b".into()]);

        assert_eq!(pr.status, PullRequestStatus::Open);
        assert_eq!(pr.merged_at, None);
        assert!(pr.has_reviewer("b"));
        assert!(!pr.has_reviewer("a"));
        assert!(!pr.is_merged());
        assert_eq!(
            pr.to_short(),
            PullRequestShort {
                id: "pr-1".into(),
                name: "Fix".into(),
                author_id: "a".into(),
                status: PullRequestStatus::Open
            }
        );
    }
}
