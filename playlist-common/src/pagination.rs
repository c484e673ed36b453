//! Pagination utilities
//!
//! Pages are 1-indexed. Unlike a clamped browser view, a page past the end
//! is valid and simply empty.

use crate::model::Song;
use crate::{Error, Result};
use serde::Serialize;
use std::ops::Range;

/// Default page number
pub const DEFAULT_PAGE: usize = 1;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Validate a requested page
    ///
    /// Takes signed values so raw query parameters can be checked here.
    /// Requires `page >= 1` and `1 <= size <= MAX_PAGE_SIZE`.
    pub fn new(page: i64, size: i64) -> Result<Self> {
        if page < 1 {
            return Err(Error::InvalidInput(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        if size < 1 || size > MAX_PAGE_SIZE as i64 {
            return Err(Error::InvalidInput(format!(
                "size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, size
            )));
        }

        // size is at most MAX_PAGE_SIZE; page saturates on narrow targets
        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            size: size as usize,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row range `[start, start + size)` clamped to `total`
    ///
    /// # Examples
    /// ```
    /// use playlist_common::pagination::PageRequest;
    ///
    /// let p = PageRequest::new(3, 10).unwrap();
    /// assert_eq!(p.range(25), 20..25);
    /// assert_eq!(p.range(15), 15..15);
    /// ```
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.size).min(total);
        let end = start.saturating_add(self.size).min(total);
        start..end
    }
}

/// Number of pages needed for `total` rows, 0 when there are none
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    total.div_ceil(size)
}

/// One page of songs plus the metadata needed to navigate
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub songs: Vec<Song>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}
