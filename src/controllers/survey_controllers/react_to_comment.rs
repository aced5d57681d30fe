use axum::{
    extract::{Path, State},
    Json,
};

use crate::controllers::survey_controllers::models::ReactRequest;
use crate::models::vote_models::ReactionTotals;
use crate::state::AppState;
use crate::storage::VoteStore;
use crate::survey::ledger;
use crate::utils::error::AppResult;

pub async fn react_to_comment<S: VoteStore>(
    Path(record_id): Path<String>,
    State(state): State<AppState<S>>,
    Json(payload): Json<ReactRequest>,
) -> AppResult<Json<ReactionTotals>> {
    let kind = payload.kind.unwrap_or_default();
    let totals = ledger::react(&state.store, &record_id, &kind).await?;

    Ok(Json(totals))
}
