use axum::{extract::State, http::StatusCode, Json};

use crate::controllers::survey_controllers::models::{SubmitVoteRequest, SubmitVoteResponse};
use crate::models::vote_models::ScoreMap;
use crate::state::AppState;
use crate::storage::VoteStore;
use crate::survey::{identity, ledger};
use crate::utils::error::AppResult;

pub async fn submit_vote<S: VoteStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<SubmitVoteRequest>,
) -> AppResult<(StatusCode, Json<SubmitVoteResponse>)> {
    let voter_identity = identity::resolve(
        payload.voter_id.as_deref(),
        payload.id_token.as_deref(),
        state.verifier.as_ref(),
    )?;

    // Null-valued entries mean "not rated" and are dropped before admission.
    let scores: ScoreMap = payload
        .notas
        .into_iter()
        .filter_map(|(criterion, value)| value.map(|v| (criterion, v)))
        .collect();

    let record = ledger::submit(
        &state.store,
        &voter_identity,
        state.clock.today(),
        scores,
        payload.comment,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitVoteResponse {
            message: "Vote recorded".to_string(),
            id: record.id.to_hex(),
        }),
    ))
}
