//! Song row model
//!
//! A [`Song`] is one row of the normalized table. Besides the typed lookup
//! keys (`id`, `title`) it carries every other source attribute untouched,
//! plus the fields derived during normalization.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Column holding the exact-match lookup key
pub const ID_COLUMN: &str = "id";

/// Column searched by title queries
pub const TITLE_COLUMN: &str = "title";

/// Source column the derived `duration_s` is computed from
pub const DURATION_MS_COLUMN: &str = "duration_ms";

/// Zero-based row position, assigned during normalization
pub const INDEX_FIELD: &str = "index";

/// User rating, 0 = unrated
pub const STAR_RATING_FIELD: &str = "star_rating";

/// `duration_ms / 1000`, present only when `duration_ms` is
pub const DURATION_S_FIELD: &str = "duration_s";

/// Field names produced by normalization; a source document may not use them
pub const DERIVED_FIELDS: &[&str] = &[INDEX_FIELD, STAR_RATING_FIELD, DURATION_S_FIELD];

/// One normalized song row
///
/// Serializes flat: `{index, id, title, <source attributes...>, star_rating, duration_s?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub index: usize,
    pub id: String,
    pub title: String,

    /// Remaining source attributes, in source document order
    #[serde(flatten)]
    pub attributes: Map<String, Value>,

    pub star_rating: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_s: Option<f64>,
}

impl Song {
    /// Look up any field by column name as JSON
    pub fn value(&self, column: &str) -> Option<Value> {
        match column {
            INDEX_FIELD => Some(json!(self.index)),
            ID_COLUMN => Some(Value::String(self.id.clone())),
            TITLE_COLUMN => Some(Value::String(self.title.clone())),
            STAR_RATING_FIELD => Some(json!(self.star_rating)),
            DURATION_S_FIELD => self.duration_s.map(|d| json!(d)),
            other => self.attributes.get(other).cloned(),
        }
    }

    /// Look up a numeric field as `f64`
    ///
    /// Returns `None` when the field is absent or not a number.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            INDEX_FIELD => Some(self.index as f64),
            STAR_RATING_FIELD => Some(f64::from(self.star_rating)),
            DURATION_S_FIELD => self.duration_s,
            ID_COLUMN | TITLE_COLUMN => None,
            other => self.attributes.get(other).and_then(Value::as_f64),
        }
    }
}

/// Ordered sequence of song rows
///
/// Row order is the source row-index order and never changes after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Source attribute names in document order (includes `id` and `title`)
    pub columns: Vec<String>,
    pub rows: Vec<Song>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source carried `duration_ms`, and so rows carry `duration_s`
    pub fn has_duration(&self) -> bool {
        self.columns.iter().any(|c| c == DURATION_MS_COLUMN)
    }
}
