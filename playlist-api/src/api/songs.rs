//! Song listing and lookup
//!
//! Paginated browsing, case-insensitive title search and exact id lookup.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use playlist_common::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use playlist_common::{Page, PageRequest, Song};
use serde::Deserialize;
use tracing::debug;

use crate::{ApiError, ApiResult, AppState};

/// Query parameters for song listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Songs per page (1-100)
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE as i64
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

/// Query parameters for title search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub title: String,
}

/// GET /api/songs?page=1&size=10
///
/// Returns one page of songs with `total` and `total_pages`.
/// A page past the end is an empty list, not an error.
pub async fn list_songs(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Page>> {
    let Query(query) = query?;
    let request = PageRequest::new(query.page, query.size)?;
    let store = state.read().await?;
    Ok(Json(store.list_page(request)))
}

/// GET /api/songs/search?title=...
///
/// Returns the first song whose title contains the query, ignoring case.
pub async fn search_by_title(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Song>> {
    let Query(query) = query?;
    let store = state.read().await?;
    debug!("Searching title for '{}'", query.title);

    store.find_by_title(&query.title).map(Json).ok_or_else(|| {
        ApiError::NotFound(format!(
            "No song found with title containing '{}'",
            query.title
        ))
    })
}

/// GET /api/songs/by-id/:id
///
/// Exact, case-sensitive id match. Lives under `by-id/` so that ids such as
/// "search" or "rating" do not collide with the sibling routes.
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Song>> {
    let store = state.read().await?;

    store
        .find_by_id(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Song with ID '{}' not found", id)))
}
