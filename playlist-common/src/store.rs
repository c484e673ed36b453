//! In-memory song table
//!
//! [`SongStore`] owns the normalized rows and answers every query with a
//! linear scan. Reads hand out clones, so a snapshot taken before a rating
//! update keeps its old value while later reads see the new one.
//!
//! The store has no internal locking. Callers sharing it between tasks wrap
//! it in a lock; `update_rating` is the only `&mut self` operation.

use crate::model::{Song, Table};
use crate::normalize;
use crate::pagination::{total_pages, Page, PageRequest};
use crate::stats::{self, Statistics};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating
pub const MAX_RATING: i64 = 5;

/// A star rating in `1..=5`
///
/// 0 is the stored "unrated" default and is never accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::InvalidRating(value.to_string()))
        }
    }
}

/// Owner of the normalized song table
#[derive(Debug, Clone, Default)]
pub struct SongStore {
    table: Table,
}

impl SongStore {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Load and normalize the source document at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let table = normalize::load_table(path)?;
        info!("Song store ready with {} songs", table.len());
        Ok(Self::new(table))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Source attribute names in document order
    pub fn columns(&self) -> &[String] {
        &self.table.columns
    }

    /// Rows `[(page-1)*size, page*size)` clamped to the table, plus totals
    pub fn list_page(&self, request: PageRequest) -> Page {
        let total = self.table.len();
        let songs = self.table.rows[request.range(total)].to_vec();
        debug!(
            "Listing page {} (size {}): {} of {} songs",
            request.page(),
            request.size(),
            songs.len(),
            total
        );

        Page {
            songs,
            total,
            page: request.page(),
            size: request.size(),
            total_pages: total_pages(total, request.size()),
        }
    }

    /// First song whose title contains `query`, ignoring case
    ///
    /// An empty query matches the first row.
    pub fn find_by_title(&self, query: &str) -> Option<Song> {
        let needle = query.to_lowercase();
        self.table
            .rows
            .iter()
            .find(|song| song.title.to_lowercase().contains(&needle))
            .cloned()
    }

    /// First song whose id equals `id` exactly
    pub fn find_by_id(&self, id: &str) -> Option<Song> {
        self.table.rows.iter().find(|song| song.id == id).cloned()
    }

    /// Set the rating of the first song with `id`
    ///
    /// The rating is validated before the table is touched. Returns `false`
    /// when no song has that id.
    pub fn update_rating(&mut self, id: &str, rating: i64) -> Result<bool> {
        let rating = Rating::try_from(rating)?;

        match self.table.rows.iter_mut().find(|song| song.id == id) {
            Some(song) => {
                song.star_rating = rating.value();
                info!("Set rating of song '{}' to {}", id, rating.value());
                Ok(true)
            }
            None => {
                warn!("Rating update for unknown song id '{}'", id);
                Ok(false)
            }
        }
    }

    /// Statistics over all rows; empty for an empty table
    pub fn statistics(&self) -> Statistics {
        stats::compute(&self.table.rows)
    }

    /// Statistics over all rows, failing on an empty table
    pub fn non_empty_statistics(&self) -> Result<Statistics> {
        if self.table.is_empty() {
            return Err(Error::EmptyTable);
        }
        Ok(self.statistics())
    }

    /// Full copy of the current table
    pub fn snapshot(&self) -> Table {
        self.table.clone()
    }
}
