pub mod add_team;
pub mod get_team;
