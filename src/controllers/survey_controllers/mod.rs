pub mod get_ratings;
pub mod list_comments;
pub mod models;
pub mod react_to_comment;
pub mod submit_vote;
