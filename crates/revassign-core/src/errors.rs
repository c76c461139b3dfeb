//! Domain errors.

use thiserror::Error;

/// Domain error.
///
/// Every variant but `DatabaseError` is an expected outcome of a request.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Pull request '{id}' already exists")]
    PullRequestAlreadyExists { id: String },

    #[error("Pull request '{id}' not found")]
    PullRequestNotFound { id: String },

    #[error("User '{id}' not found")]
    UserNotFound { id: String },

    #[error("Pull request '{id}' is already merged")]
    AlreadyMerged { id: String },

    #[error("User '{user_id}' is not a reviewer of pull request '{id}'")]
    NotReviewer { id: String, user_id: String },

    #[error("No replacement candidate for reviewer '{user_id}' on pull request '{id}'")]
    NoCandidate { id: String, user_id: String },

    #[error("Team '{name}' already exists")]
    TeamAlreadyExists { name: String },

    #[error("Team '{name}' not found")]
    TeamNotFound { name: String },

    /// Wraps [`revassign_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: revassign_database_interface::DatabaseError,
    },
}

impl From<revassign_database_interface::DatabaseError> for DomainError {
    fn from(e: revassign_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
