use chrono::NaiveDate;

use crate::models::vote_models::{ReactionKind, ReactionTotals, ScoreMap, VoteRecord};
use crate::storage::{InsertOutcome, VoteStore};
use crate::utils::error::AppError;

/// Admits one vote per `(identity, day)`.
///
/// The lookup catches the common resubmission early; the storage-level
/// uniqueness constraint behind `insert_if_absent` closes the race between
/// concurrent submissions, and both paths report `DuplicateVote`.
pub async fn submit<S: VoteStore>(
    store: &S,
    identity: &str,
    day: NaiveDate,
    scores: ScoreMap,
    comment: Option<String>,
) -> Result<VoteRecord, AppError> {
    if scores.is_empty() {
        return Err(AppError::IncompleteSubmission);
    }

    if let Some((criterion, value)) = scores.iter().find(|(_, v)| **v < 0.0) {
        return Err(AppError::Validation(format!(
            "score for {} must be non-negative, got {}",
            criterion, value
        )));
    }

    if store.find_by_voter_and_day(identity, day).await?.is_some() {
        return Err(AppError::DuplicateVote);
    }

    let record = VoteRecord::new(identity, day, scores, comment);
    match store.insert_if_absent(&record).await? {
        InsertOutcome::Inserted => Ok(record),
        InsertOutcome::Duplicate => Err(AppError::DuplicateVote),
    }
}

/// Records a like/dislike reaction against one vote record.
pub async fn react<S: VoteStore>(
    store: &S,
    record_id: &str,
    kind: &str,
) -> Result<ReactionTotals, AppError> {
    let kind = ReactionKind::parse(kind)
        .ok_or_else(|| AppError::InvalidReactionType(kind.to_string()))?;

    store
        .atomic_increment(record_id, kind)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no vote record with id {}", record_id)))
}
