use std::collections::BTreeMap;

use crate::models::vote_models::Criterion;
use crate::storage::VoteStore;
use crate::survey::window::DateWindow;
use crate::utils::error::AppError;

/// Per-criterion means over a window.
///
/// `count` is the number of records in the window, not a per-criterion
/// denominator: a record that skipped a criterion still counts here while
/// staying out of that criterion's mean.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub avg: BTreeMap<Criterion, f64>,
    pub count: usize,
}

pub async fn average<S: VoteStore>(
    store: &S,
    window: DateWindow,
) -> Result<RatingSummary, AppError> {
    let records = store.find_in_range(window.from, window.to).await?;

    let mut avg = BTreeMap::new();
    for criterion in Criterion::ALL {
        let values: Vec<f64> = records
            .iter()
            .filter_map(|r| r.scores.get(&criterion).copied())
            .collect();

        let mean = if values.is_empty() {
            0.0
        } else {
            round2(values.iter().sum::<f64>() / values.len() as f64)
        };
        avg.insert(criterion, mean);
    }

    Ok(RatingSummary {
        avg,
        count: records.len(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vote_models::{ScoreMap, VoteRecord};
    use crate::storage::memory::MemoryVoteStore;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn window(from: &str, to: &str) -> DateWindow {
        DateWindow {
            from: day(from),
            to: day(to),
        }
    }

    async fn insert(store: &MemoryVoteStore, voter: &str, d: &str, entries: &[(Criterion, f64)]) {
        let scores: ScoreMap = entries.iter().copied().collect();
        let record = VoteRecord::new(voter, day(d), scores, None);
        store.insert_if_absent(&record).await.unwrap();
    }

    #[tokio::test]
    async fn empty_window_reports_zero_for_every_criterion() {
        let store = MemoryVoteStore::new();
        let summary = average(&store, window("2025-06-01", "2025-06-30"))
            .await
            .unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg.len(), Criterion::ALL.len());
        assert!(summary.avg.values().all(|v| *v == 0.0));
    }

    #[tokio::test]
    async fn unrated_criteria_stay_out_of_the_denominator() {
        let store = MemoryVoteStore::new();
        // One record rates only variety, the other only taste.
        insert(&store, "ana", "2025-06-01", &[(Criterion::Variety, 5.0)]).await;
        insert(&store, "rui", "2025-06-01", &[(Criterion::Taste, 4.0)]).await;

        let summary = average(&store, window("2025-06-01", "2025-06-01"))
            .await
            .unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg[&Criterion::Variety], 5.0);
        assert_eq!(summary.avg[&Criterion::Taste], 4.0);
        assert_eq!(summary.avg[&Criterion::Quality], 0.0);
    }

    #[tokio::test]
    async fn means_round_to_two_decimals() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-06-01", &[(Criterion::Service, 4.0)]).await;
        insert(&store, "b", "2025-06-01", &[(Criterion::Service, 5.0)]).await;
        insert(&store, "c", "2025-06-01", &[(Criterion::Service, 5.0)]).await;

        let summary = average(&store, window("2025-06-01", "2025-06-01"))
            .await
            .unwrap();

        // 14 / 3 = 4.666...
        assert_eq!(summary.avg[&Criterion::Service], 4.67);
    }

    #[tokio::test]
    async fn selection_is_inclusive_and_ignores_outside_days() {
        let store = MemoryVoteStore::new();
        insert(&store, "a", "2025-05-31", &[(Criterion::Taste, 1.0)]).await;
        insert(&store, "b", "2025-06-01", &[(Criterion::Taste, 3.0)]).await;
        insert(&store, "c", "2025-06-02", &[(Criterion::Taste, 5.0)]).await;
        insert(&store, "d", "2025-06-03", &[(Criterion::Taste, 1.0)]).await;

        let summary = average(&store, window("2025-06-01", "2025-06-02"))
            .await
            .unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg[&Criterion::Taste], 4.0);
    }
}
