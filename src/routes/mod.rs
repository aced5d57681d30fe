use std::time::Instant;

use axum::{response::Json, routing::get, Router};
use once_cell::sync::Lazy;
use serde_json::json;

use crate::state::AppState;
use crate::storage::VoteStore;

pub mod survey_routes;

pub static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub fn api_router<S: VoteStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", survey_routes::survey_routes(state))
}

async fn root() -> Json<serde_json::Value> {
    let seconds = START_TIME.elapsed().as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let uptime = if days > 0 {
        format!("{}d {}h {}m {}s", days, hours % 24, minutes % 60, seconds % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "message": format!("Backend is running! Uptime: {}", uptime)
    }))
}
