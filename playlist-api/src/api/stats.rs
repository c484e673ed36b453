//! Dataset statistics

use axum::{extract::State, Json};
use playlist_common::Statistics;

use crate::{ApiResult, AppState};

/// GET /api/stats
///
/// Returns `{total_songs, statistics: {field: {min, max, mean, median}}}`.
/// An empty table yields `total_songs: 0` and no fields.
pub async fn get_statistics(State(state): State<AppState>) -> ApiResult<Json<Statistics>> {
    let store = state.read().await?;
    Ok(Json(store.statistics()))
}
