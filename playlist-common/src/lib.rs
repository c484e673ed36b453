//! # Playlist Common Library
//!
//! Shared code for the playlist service including:
//! - Error taxonomy
//! - Bootstrap configuration loading
//! - Song row model and column-to-row normalization
//! - In-memory song table with pagination, search, rating and statistics
//! - CSV export of the current table

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod pagination;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
pub use model::{Song, Table};
pub use pagination::{Page, PageRequest};
pub use stats::{FieldStats, Statistics};
pub use store::{Rating, SongStore};
