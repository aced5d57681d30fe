use chrono::NaiveDate;
use serde::Serialize;

use crate::storage::VoteStore;
use crate::survey::window::DateWindow;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct CommentEntry {
    pub id: String,
    pub day: NaiveDate,
    pub comment: String,
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Default)]
pub struct CommentFilter {
    /// Case-insensitive substring match against the comment text.
    pub query: Option<String>,
    pub min_likes: Option<i64>,
}

/// Commented records in the window, filtered and ordered by engagement:
/// most liked first, fewer dislikes breaking ties, newer day after that.
/// The sort is stable, so remaining ties keep store order.
pub async fn list<S: VoteStore>(
    store: &S,
    window: DateWindow,
    filter: &CommentFilter,
) -> Result<Vec<CommentEntry>, AppError> {
    let records = store.find_in_range(window.from, window.to).await?;
    let needle = filter.query.as_deref().map(str::to_lowercase);

    let mut entries: Vec<CommentEntry> = records
        .into_iter()
        .filter_map(|record| {
            let comment = record.comment?;
            if comment.trim().is_empty() {
                return None;
            }
            Some(CommentEntry {
                id: record.id.to_hex(),
                day: record.day,
                comment,
                likes: record.likes,
                dislikes: record.dislikes,
            })
        })
        .filter(|entry| {
            needle
                .as_ref()
                .map_or(true, |q| entry.comment.to_lowercase().contains(q.as_str()))
        })
        .filter(|entry| filter.min_likes.map_or(true, |min| entry.likes >= min))
        .collect();

    entries.sort_by(|a, b| {
        b.likes
            .cmp(&a.likes)
            .then(a.dislikes.cmp(&b.dislikes))
            .then(b.day.cmp(&a.day))
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vote_models::{Criterion, ScoreMap, VoteRecord};
    use crate::storage::memory::MemoryVoteStore;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn window(from: &str, to: &str) -> DateWindow {
        DateWindow {
            from: day(from),
            to: day(to),
        }
    }

    async fn insert(
        store: &MemoryVoteStore,
        voter: &str,
        d: &str,
        comment: Option<&str>,
        likes: i64,
        dislikes: i64,
    ) -> String {
        let mut scores = ScoreMap::new();
        scores.insert(Criterion::Taste, 3.0);
        let mut record = VoteRecord::new(voter, day(d), scores, comment.map(str::to_string));
        record.likes = likes;
        record.dislikes = dislikes;
        store.insert_if_absent(&record).await.unwrap();
        record.id.to_hex()
    }

    #[tokio::test]
    async fn only_commented_records_appear() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", Some("Great Service"), 0, 0).await;
        insert(&store, "b", "2025-06-01", None, 0, 0).await;
        insert(&store, "c", "2025-06-01", Some("   "), 0, 0).await;

        let entries = list(&store, window("2025-06-01", "2025-06-01"), &CommentFilter::default())
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "Great Service");
    }

    #[tokio::test]
    async fn query_matches_case_insensitive_substrings() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", Some("Great Service"), 0, 0).await;
        insert(&store, "b", "2025-06-01", Some("too salty"), 0, 0).await;

        let filter = CommentFilter {
            query: Some("service".to_string()),
            min_likes: None,
        };
        let entries = list(&store, window("2025-06-01", "2025-06-01"), &filter)
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "Great Service");
    }

    #[tokio::test]
    async fn min_likes_threshold_filters_low_engagement() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", Some("popular"), 5, 0).await;
        insert(&store, "b", "2025-06-01", Some("ignored"), 1, 0).await;

        let filter = CommentFilter {
            query: None,
            min_likes: Some(2),
        };
        let entries = list(&store, window("2025-06-01", "2025-06-01"), &filter)
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "popular");
    }

    #[tokio::test]
    async fn orders_by_likes_then_dislikes_then_day() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", Some("three-one"), 3, 1).await;
        insert(&store, "b", "2025-06-01", Some("three-zero"), 3, 0).await;
        insert(&store, "c", "2025-06-01", Some("one-zero"), 1, 0).await;
        insert(&store, "d", "2025-06-02", Some("one-zero-newer"), 1, 0).await;

        let entries = list(&store, window("2025-06-01", "2025-06-02"), &CommentFilter::default())
            .await
            .unwrap();

        let order: Vec<_> = entries.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(order, ["three-zero", "three-one", "one-zero-newer", "one-zero"]);
    }

    #[tokio::test]
    async fn full_ties_keep_store_order() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", Some("first"), 2, 2).await;
        insert(&store, "b", "2025-06-01", Some("second"), 2, 2).await;

        let entries = list(&store, window("2025-06-01", "2025-06-01"), &CommentFilter::default())
            .await
            .unwrap();

        let order: Vec<_> = entries.iter().map(|e| e.comment.as_str()).collect();
        assert_eq!(order, ["first", "second"]);
    }

    #[tokio::test]
    async fn window_excludes_outside_days() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-05-31", Some("before"), 0, 0).await;
        insert(&store, "b", "2025-06-01", Some("inside"), 0, 0).await;

        let entries = list(&store, window("2025-06-01", "2025-06-01"), &CommentFilter::default())
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].comment, "inside");
    }
}
