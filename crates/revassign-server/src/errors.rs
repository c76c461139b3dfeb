//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use revassign_core::DomainError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{source}")]
    DomainError { source: DomainError },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl ServerError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Stable error code, sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::DomainError { source } => match source {
                DomainError::PullRequestAlreadyExists { .. } => "PR_EXISTS",
                DomainError::PullRequestNotFound { .. }
                | DomainError::UserNotFound { .. }
                | DomainError::TeamNotFound { .. } => "NOT_FOUND",
                DomainError::AlreadyMerged { .. } => "PR_MERGED",
                DomainError::NotReviewer { .. } => "NOT_ASSIGNED",
                DomainError::NoCandidate { .. } => "NO_CANDIDATE",
                DomainError::TeamAlreadyExists { .. } => "TEAM_EXISTS",
                DomainError::DatabaseError { .. } => "INTERNAL",
            },
            Self::IoError { .. } => "INTERNAL",
        }
    }

    fn message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            "internal server error".into()
        } else {
            self.to_string()
        }
    }
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::DomainError { source } => match source {
                DomainError::PullRequestNotFound { .. }
                | DomainError::UserNotFound { .. }
                | DomainError::TeamNotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::PullRequestAlreadyExists { .. }
                | DomainError::AlreadyMerged { .. }
                | DomainError::NotReviewer { .. }
                | DomainError::NoCandidate { .. } => StatusCode::CONFLICT,
                DomainError::TeamAlreadyExists { .. } => StatusCode::BAD_REQUEST,
                DomainError::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::IoError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, message = "Internal error");
        }

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.message(),
            }
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use revassign_database_interface::DatabaseError;

    use super::*;

    #[test]
    fn domain_mapping() {
        let cases = [
            (
                DomainError::PullRequestAlreadyExists { id: "pr-1".into() },
                StatusCode::CONFLICT,
                "PR_EXISTS",
            ),
            (
                DomainError::PullRequestNotFound { id: "pr-1".into() },
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                DomainError::TeamNotFound {
                    name: "backend".into(),
                },
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                DomainError::AlreadyMerged { id: "pr-1".into() },
                StatusCode::CONFLICT,
                "PR_MERGED",
            ),
            (
                DomainError::NotReviewer {
                    id: "pr-1".into(),
                    user_id: "u9".into(),
                },
                StatusCode::CONFLICT,
                "NOT_ASSIGNED",
            ),
            (
                DomainError::NoCandidate {
                    id: "pr-1".into(),
                    user_id: "b".into(),
                },
                StatusCode::CONFLICT,
                "NO_CANDIDATE",
            ),
            (
                DomainError::TeamAlreadyExists {
                    name: "backend".into(),
                },
                StatusCode::BAD_REQUEST,
                "TEAM_EXISTS",
            ),
        ];

        for (error, status, code) in cases {
            let error = ServerError::from(error);
            assert_eq!(error.status_code(), status);
            assert_eq!(error.code(), code);
        }
    }

    #[test]
    fn internal_errors_are_masked() {
        let error = ServerError::from(DomainError::from(DatabaseError::ImplementationError {
            source: "connection reset".into(),
        }));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), "INTERNAL");
        assert_eq!(error.message(), "internal server error");
    }
}
