use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::vote_models::Criterion;
use crate::survey::comments::CommentEntry;
use crate::survey::window::DateWindow;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitVoteRequest {
    pub voter_id: Option<String>,
    /// Rated criteria; an explicit null means "not rated". A missing field
    /// is treated like an empty map.
    #[serde(default)]
    pub notas: BTreeMap<Criterion, Option<f64>>,
    pub comment: Option<String>,
    pub id_token: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SubmitVoteResponse {
    pub message: String,
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct RatingsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct RatingsResponse {
    pub avg: BTreeMap<Criterion, f64>,
    pub count: usize,
    pub period: DateWindow,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub q: Option<String>,
    pub min_likes: Option<i64>,
}

#[derive(Serialize, Debug)]
pub struct CommentsResponse {
    pub comments: Vec<CommentEntry>,
    pub period: DateWindow,
    pub count: usize,
}

#[derive(Deserialize, Debug)]
pub struct ReactRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
