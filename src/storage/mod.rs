use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::vote_models::{ReactionKind, ReactionTotals, VoteRecord};

pub mod memory;
pub mod mongo;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record for the same `(voter_identity, day)` already exists.
    Duplicate,
}

/// Record-store boundary for the vote engine.
///
/// Implementations must make `insert_if_absent` atomic with respect to the
/// `(voter_identity, day)` uniqueness rule, and `atomic_increment` a true
/// storage-level increment rather than read-modify-write.
#[async_trait]
pub trait VoteStore: Clone + Send + Sync + 'static {
    async fn find_by_voter_and_day(
        &self,
        voter_identity: &str,
        day: NaiveDate,
    ) -> Result<Option<VoteRecord>, StoreError>;

    async fn insert_if_absent(&self, record: &VoteRecord) -> Result<InsertOutcome, StoreError>;

    /// All records with `from <= day <= to`, inclusive on both ends.
    async fn find_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VoteRecord>, StoreError>;

    /// Bumps the matching counter by one and returns the new totals, or
    /// `None` when no record has that id.
    async fn atomic_increment(
        &self,
        record_id: &str,
        kind: ReactionKind,
    ) -> Result<Option<ReactionTotals>, StoreError>;
}
