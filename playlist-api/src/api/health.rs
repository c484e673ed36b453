//! Health check and service banner

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" once the song table is loaded, "starting" before
    pub status: String,
    pub module: String,
    pub version: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_songs: Option<usize>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;
    let total_songs = state.loaded_songs().await;
    let status = if total_songs.is_some() { "ok" } else { "starting" };

    Json(HealthResponse {
        status: status.to_string(),
        module: "playlist-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        ready: total_songs.is_some(),
        total_songs,
    })
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Playlist API is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
