use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::survey_controllers::{
    get_ratings, list_comments, react_to_comment, submit_vote,
};
use crate::state::AppState;
use crate::storage::VoteStore;

pub fn survey_routes<S: VoteStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/votes", post(submit_vote::submit_vote::<S>))
        .route("/ratings", get(get_ratings::get_ratings::<S>))
        .route("/comments", get(list_comments::list_comments::<S>))
        .route("/comments/:id/react", post(react_to_comment::react_to_comment::<S>))
        .with_state(state)
}
