pub mod choose_replacement;
pub mod select_reviewers;
