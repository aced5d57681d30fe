use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of rating dimensions on a submission. Extending it is a
/// schema change, not a runtime concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Criterion {
    Variety,
    Taste,
    Quality,
    MeatDish,
    Dessert,
    Service,
}

const CRITERION_NAMES: [&str; 6] = [
    "variety", "taste", "quality", "meatDish", "dessert", "service",
];

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::Variety,
        Criterion::Taste,
        Criterion::Quality,
        Criterion::MeatDish,
        Criterion::Dessert,
        Criterion::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Variety => "variety",
            Criterion::Taste => "taste",
            Criterion::Quality => "quality",
            Criterion::MeatDish => "meatDish",
            Criterion::Dessert => "dessert",
            Criterion::Service => "service",
        }
    }

    pub fn parse(value: &str) -> Option<Criterion> {
        match value {
            "variety" => Some(Criterion::Variety),
            "taste" => Some(Criterion::Taste),
            "quality" => Some(Criterion::Quality),
            "meatDish" => Some(Criterion::MeatDish),
            "dessert" => Some(Criterion::Dessert),
            "service" => Some(Criterion::Service),
            _ => None,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Criterion is used as a map key in both JSON bodies and BSON documents, so
// it must serialize as a plain string rather than a unit variant.
impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Criterion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Criterion::parse(&value)
            .ok_or_else(|| de::Error::unknown_variant(&value, &CRITERION_NAMES))
    }
}

/// Rated criteria only; a missing key means "not rated".
pub type ScoreMap = BTreeMap<Criterion, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn parse(value: &str) -> Option<ReactionKind> {
        match value {
            "like" => Some(ReactionKind::Like),
            "dislike" => Some(ReactionKind::Dislike),
            _ => None,
        }
    }

    pub fn counter_field(&self) -> &'static str {
        match self {
            ReactionKind::Like => "likes",
            ReactionKind::Dislike => "dislikes",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReactionTotals {
    pub likes: i64,
    pub dislikes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct VoteRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub voter_identity: String,

    /// Calendar day the vote was cast on, server-assigned. Serializes as
    /// fixed-width YYYY-MM-DD, so string range filters stay order-correct.
    pub day: NaiveDate,

    pub scores: ScoreMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    pub likes: i64,
    pub dislikes: i64,
}

impl VoteRecord {
    pub fn new(
        voter_identity: &str,
        day: NaiveDate,
        scores: ScoreMap,
        comment: Option<String>,
    ) -> Self {
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Self {
            id: ObjectId::new(),
            voter_identity: voter_identity.to_string(),
            day,
            scores,
            comment,
            likes: 0,
            dislikes: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn criterion_round_trips_as_map_key() {
        let mut scores = ScoreMap::new();
        scores.insert(Criterion::MeatDish, 4.0);
        scores.insert(Criterion::Service, 5.0);

        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"meatDish":4.0,"service":5.0}"#);

        let back: ScoreMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let result: Result<ScoreMap, _> = serde_json::from_str(r#"{"ambience":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn reaction_kind_parses_only_like_and_dislike() {
        assert_eq!(ReactionKind::parse("like"), Some(ReactionKind::Like));
        assert_eq!(ReactionKind::parse("dislike"), Some(ReactionKind::Dislike));
        assert_eq!(ReactionKind::parse("Like"), None);
        assert_eq!(ReactionKind::parse(""), None);
    }

    #[test]
    fn new_record_normalizes_blank_comments() {
        let record = VoteRecord::new("ana", day("2025-06-01"), ScoreMap::new(), Some("   ".into()));
        assert_eq!(record.comment, None);

        let record = VoteRecord::new("ana", day("2025-06-01"), ScoreMap::new(), Some("  ok  ".into()));
        assert_eq!(record.comment.as_deref(), Some("ok"));

        assert_eq!(record.likes, 0);
        assert_eq!(record.dislikes, 0);
    }
}
