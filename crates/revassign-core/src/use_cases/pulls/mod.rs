pub mod create_pull_request;
pub mod merge_pull_request;
pub mod reassign_reviewer;
