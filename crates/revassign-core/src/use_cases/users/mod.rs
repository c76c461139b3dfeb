pub mod get_user_reviews;
pub mod set_user_is_active;
