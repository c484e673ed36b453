//! playlist-api library - HTTP surface over the in-memory song table
//!
//! Exposes the router and shared state so integration tests can drive the
//! API without binding a socket.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::{DateTime, Utc};
use playlist_common::{Error, SongStore};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockMappedWriteGuard, RwLockReadGuard, RwLockWriteGuard};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

pub mod api;
pub mod cli;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across handlers
///
/// The store sits behind a single `RwLock`: rating updates take the write
/// half, so readers never observe a partially applied update.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Option<SongStore>>>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// State serving an already loaded store
    pub fn new(store: SongStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(Some(store))),
            startup_time: Utc::now(),
        }
    }

    /// State with no store yet; queries fail with `NotReady` until [`install`](Self::install)
    pub fn unloaded() -> Self {
        Self {
            store: Arc::new(RwLock::new(None)),
            startup_time: Utc::now(),
        }
    }

    /// Make a loaded store available to handlers
    pub async fn install(&self, store: SongStore) {
        let songs = store.len();
        *self.store.write().await = Some(store);
        info!("Song store installed ({} songs)", songs);
    }

    /// Number of loaded songs, `None` while unloaded
    pub async fn loaded_songs(&self) -> Option<usize> {
        self.store.read().await.as_ref().map(SongStore::len)
    }

    /// Shared access to the store
    pub async fn read(&self) -> ApiResult<RwLockReadGuard<'_, SongStore>> {
        RwLockReadGuard::try_map(self.store.read().await, Option::as_ref)
            .map_err(|_| ApiError::Common(Error::NotReady))
    }

    /// Exclusive access to the store
    pub async fn write(&self) -> ApiResult<RwLockMappedWriteGuard<'_, SongStore>> {
        RwLockWriteGuard::try_map(self.store.write().await, Option::as_mut)
            .map_err(|_| ApiError::Common(Error::NotReady))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/songs", get(api::list_songs))
        .route("/api/songs/search", get(api::search_by_title))
        .route("/api/songs/rating", post(api::update_rating))
        .route("/api/songs/by-id/:id", get(api::get_song))
        .route("/api/stats", get(api::get_statistics))
        .route("/api/export/csv", get(api::export_csv))
        .merge(api::health_routes())
        .with_state(state)
}

/// CORS layer allowing the configured browser origins
pub fn cors_layer(origins: &[String]) -> playlist_common::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| Error::Config(format!("Invalid CORS origin '{}': {}", origin, e)))
        })
        .collect::<playlist_common::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true))
}
