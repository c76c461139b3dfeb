//! Domain models.

mod pull_request;
mod pull_request_status;
mod team;
mod user;

pub use pull_request::{PullRequest, PullRequestShort};
pub use pull_request_status::{PullRequestStatus, PullRequestStatusError};
pub use team::{Team, TeamMember};
pub use user::User;
