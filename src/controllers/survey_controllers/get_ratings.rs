use axum::{
    extract::{Query, State},
    Json,
};

use crate::controllers::survey_controllers::models::{RatingsQuery, RatingsResponse};
use crate::state::AppState;
use crate::storage::VoteStore;
use crate::survey::ratings;
use crate::survey::window::{self, DateWindow};
use crate::utils::error::AppResult;

pub async fn get_ratings<S: VoteStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<RatingsQuery>,
) -> AppResult<Json<RatingsResponse>> {
    let from = window::parse_day(params.from.as_deref())?;
    let to = window::parse_day(params.to.as_deref())?;
    let period = DateWindow::resolve(from, to, state.clock.today());

    let summary = ratings::average(&state.store, period).await?;

    Ok(Json(RatingsResponse {
        avg: summary.avg,
        count: summary.count,
        period,
    }))
}
