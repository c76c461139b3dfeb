//! Pull request state machine.
//!
//! A pull request is created `Open`, may be reassigned any number of times
//! while open, and moves to `Merged` exactly once. `Merged` is terminal.

use revassign_models::PullRequest;

use crate::{DomainError, Result};

/// Outcome of a merge request against the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTransition {
    /// Open pull request, the merge must be persisted.
    Merge,
    /// Already merged, the current record is returned unchanged.
    AlreadyMerged,
}

pub fn merge_transition(pr: &PullRequest) -> MergeTransition {
    if pr.is_merged() {
        MergeTransition::AlreadyMerged
    } else {
        MergeTransition::Merge
    }
}

/// Reassignment is only allowed on open pull requests.
pub fn ensure_open(pr: &PullRequest) -> Result<()> {
    if pr.is_merged() {
        Err(DomainError::AlreadyMerged { id: pr.id.clone() })
    } else {
        Ok(())
    }
}

pub fn ensure_reviewer(pr: &PullRequest, user_id: &str) -> Result<()> {
    if pr.has_reviewer(user_id) {
        Ok(())
    } else {
        Err(DomainError::NotReviewer {
            id: pr.id.clone(),
            user_id: user_id.into(),
        })
    }
}
