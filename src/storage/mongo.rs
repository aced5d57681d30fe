use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};

use crate::models::vote_models::{ReactionKind, ReactionTotals, VoteRecord};
use crate::storage::{InsertOutcome, StoreError, VoteStore};

pub const VOTES_COLLECTION: &str = "votes";

#[derive(Clone)]
pub struct MongoVoteStore {
    votes: Collection<VoteRecord>,
}

impl MongoVoteStore {
    /// Binds to the votes collection and installs the unique compound index
    /// that turns a concurrent duplicate submission into a rejected insert.
    pub async fn new(db: &Database) -> Result<Self, StoreError> {
        let votes = db.collection::<VoteRecord>(VOTES_COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "voter_identity": 1, "day": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        votes
            .create_index(index)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { votes })
    }
}

fn store_err(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write)) if write.code == 11_000
    )
}

#[async_trait]
impl VoteStore for MongoVoteStore {
    async fn find_by_voter_and_day(
        &self,
        voter_identity: &str,
        day: NaiveDate,
    ) -> Result<Option<VoteRecord>, StoreError> {
        self.votes
            .find_one(doc! {
                "voter_identity": voter_identity,
                "day": day.to_string(),
            })
            .await
            .map_err(store_err)
    }

    async fn insert_if_absent(&self, record: &VoteRecord) -> Result<InsertOutcome, StoreError> {
        match self.votes.insert_one(record).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if is_duplicate_key(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(store_err(e)),
        }
    }

    async fn find_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<VoteRecord>, StoreError> {
        let mut cursor = self
            .votes
            .find(doc! {
                "day": { "$gte": from.to_string(), "$lte": to.to_string() },
            })
            .await
            .map_err(store_err)?;

        let mut records = Vec::new();
        while let Some(record) = cursor.try_next().await.map_err(store_err)? {
            records.push(record);
        }

        Ok(records)
    }

    async fn atomic_increment(
        &self,
        record_id: &str,
        kind: ReactionKind,
    ) -> Result<Option<ReactionTotals>, StoreError> {
        // An unparsable id matches no record.
        let Ok(id) = ObjectId::parse_str(record_id) else {
            return Ok(None);
        };

        let mut inc = Document::new();
        inc.insert(kind.counter_field(), 1_i64);

        let updated = self
            .votes
            .find_one_and_update(doc! { "_id": id }, doc! { "$inc": inc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(store_err)?;

        Ok(updated.map(|r| ReactionTotals {
            likes: r.likes,
            dislikes: r.dislikes,
        }))
    }
}
