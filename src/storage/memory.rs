//! In-process vote store.
//!
//! Used by the test suites and selectable at runtime with `STORAGE=memory`
//! for running without a database. Everything goes through one lock, so the
//! check-then-insert and counter increments give the same atomicity
//! guarantees as the Mongo implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::vote_models::{ReactionKind, ReactionTotals, VoteRecord};
use crate::storage::{InsertOutcome, StoreError, VoteStore};

#[derive(Clone, Default)]
pub struct MemoryVoteStore {
    records: Arc<RwLock<Vec<VoteRecord>>>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err<T>(_: T) -> StoreError {
    StoreError::Unavailable("vote store lock poisoned".to_string())
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn find_by_voter_and_day(
        &self,
        voter_identity: &str,
        day: NaiveDate,
    ) -> Result<Option<VoteRecord>, StoreError> {
        let records = self.records.read().map_err(lock_err)?;
        Ok(records
            .iter()
            .find(|r| r.voter_identity == voter_identity && r.day == day)
            .cloned())
    }

    async fn insert_if_absent(&self, record: &VoteRecord) -> Result<InsertOutcome, StoreError> {
        let mut records = self.records.write().map_err(lock_err)?;

        let duplicate = records
            .iter()
            .any(|r| r.voter_identity == record.voter_identity && r.day == record.day);
        if duplicate {
            return Ok(InsertOutcome::Duplicate);
        }

        records.push(record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn find_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VoteRecord>, StoreError> {
        let records = self.records.read().map_err(lock_err)?;
        Ok(records
            .iter()
            .filter(|r| r.day >= from && r.day <= to)
            .cloned()
            .collect())
    }

    async fn atomic_increment(
        &self,
        record_id: &str,
        kind: ReactionKind,
    ) -> Result<Option<ReactionTotals>, StoreError> {
        let mut records = self.records.write().map_err(lock_err)?;

        let Some(record) = records.iter_mut().find(|r| r.id.to_hex() == record_id) else {
            return Ok(None);
        };

        match kind {
            ReactionKind::Like => record.likes += 1,
            ReactionKind::Dislike => record.dislikes += 1,
        }

        Ok(Some(ReactionTotals {
            likes: record.likes,
            dislikes: record.dislikes,
        }))
    }
}
