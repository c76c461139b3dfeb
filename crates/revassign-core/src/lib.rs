//! Reviewer assignment core.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod lifecycle;
pub mod random;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    pulls::{
        create_pull_request::CreatePullRequest, merge_pull_request::MergePullRequest,
        reassign_reviewer::ReassignReviewer,
    },
    reviews::{choose_replacement::ChooseReplacement, select_reviewers::SelectReviewers},
    teams::{add_team::AddTeam, get_team::GetTeam},
    users::{get_user_reviews::GetUserReviews, set_user_is_active::SetUserIsActive},
};

module! {
    pub CoreModule {
        components = [
            CreatePullRequest, MergePullRequest, ReassignReviewer,
            SelectReviewers, ChooseReplacement,
            AddTeam, GetTeam,
            GetUserReviews, SetUserIsActive
        ],
        providers = []
    }
}
