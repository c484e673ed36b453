//! CSV download of the full table

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use playlist_common::export;

use crate::{ApiResult, AppState};

/// Download file name offered to clients
pub const EXPORT_FILENAME: &str = "playlist_data.csv";

/// GET /api/export/csv
///
/// Returns the current table, including ratings, as a CSV attachment.
pub async fn export_csv(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let table = state.read().await?.snapshot();
    let body = export::to_csv(&table);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        body,
    ))
}
