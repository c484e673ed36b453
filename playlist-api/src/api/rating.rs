//! Star rating updates

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use playlist_common::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ApiResult, AppState};

/// Rating update request
///
/// `rating` is taken as raw JSON so that non-integer values are reported as
/// invalid ratings rather than as body deserialization failures.
#[derive(Debug, Deserialize)]
pub struct RatingUpdate {
    #[serde(alias = "song_id")]
    pub id: String,
    pub rating: Value,
}

/// Rating update outcome, echoing the accepted values
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
    pub rating: i64,
}

/// POST /api/songs/rating
///
/// Body: `{"id": "...", "rating": 1-5}` (`song_id` is accepted for `id`).
/// Returns 200 when a song was updated, 404 with `success: false` when no
/// song has that id, 400 when the rating is not an integer in 1..=5 or the
/// body does not parse.
pub async fn update_rating(
    State(state): State<AppState>,
    body: Result<Json<RatingUpdate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RatingResponse>)> {
    let Json(update) = body?;
    let rating = integral_rating(&update.rating)
        .ok_or_else(|| Error::InvalidRating(update.rating.to_string()))?;

    let updated = state.write().await?.update_rating(&update.id, rating)?;

    let (status, message) = if updated {
        (StatusCode::OK, "Rating updated successfully".to_string())
    } else {
        (
            StatusCode::NOT_FOUND,
            format!("Song with ID '{}' not found", update.id),
        )
    };

    Ok((
        status,
        Json(RatingResponse {
            success: updated,
            message,
            id: update.id,
            rating,
        }),
    ))
}

/// JSON integers, plus floats with no fractional part (`4.0`)
fn integral_rating(value: &Value) -> Option<i64> {
    if let Some(rating) = value.as_i64() {
        return Some(rating);
    }
    let rating = value.as_f64()?;
    // Range check keeps the cast exact; 1..=5 is enforced by the store
    if rating.fract() == 0.0 && rating.abs() <= i32::MAX as f64 {
        Some(rating as i64)
    } else {
        None
    }
}
