use axum::{
    extract::{Query, State},
    Json,
};

use crate::controllers::survey_controllers::models::{CommentsQuery, CommentsResponse};
use crate::state::AppState;
use crate::storage::VoteStore;
use crate::survey::comments::{self, CommentFilter};
use crate::survey::window::{self, DateWindow};
use crate::utils::error::AppResult;

pub async fn list_comments<S: VoteStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<CommentsQuery>,
) -> AppResult<Json<CommentsResponse>> {
    let from = window::parse_day(params.from.as_deref())?;
    let to = window::parse_day(params.to.as_deref())?;
    let period = DateWindow::resolve(from, to, state.clock.today());

    let filter = CommentFilter {
        query: params.q.filter(|q| !q.is_empty()),
        min_likes: params.min_likes,
    };

    let entries = comments::list(&state.store, period, &filter).await?;
    let count = entries.len();

    Ok(Json(CommentsResponse {
        comments: entries,
        period,
        count,
    }))
}
