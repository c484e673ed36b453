//! HTTP API handlers for playlist-api

pub mod export;
pub mod health;
pub mod rating;
pub mod songs;
pub mod stats;

pub use export::export_csv;
pub use health::health_routes;
pub use rating::update_rating;
pub use songs::{get_song, list_songs, search_by_title};
pub use stats::get_statistics;
