//! Aggregate statistics over numeric song fields

use crate::model::Song;
use serde::Serialize;
use std::collections::BTreeMap;

/// Numeric fields summarized by [`compute`]
pub const STAT_FIELDS: &[&str] = &[
    "danceability",
    "energy",
    "acousticness",
    "tempo",
    "duration_s",
    "valence",
];

/// Summary of one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl FieldStats {
    /// Summarize a set of values, `None` if there are none
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        };

        Some(Self {
            min: values[0],
            max: values[n - 1],
            mean,
            median,
        })
    }
}

/// Dataset statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_songs: usize,
    /// Only fields with at least one numeric value appear here
    pub statistics: BTreeMap<String, FieldStats>,
}

/// Compute statistics for [`STAT_FIELDS`] over the given rows
pub fn compute(rows: &[Song]) -> Statistics {
    let statistics = STAT_FIELDS
        .iter()
        .filter_map(|field| {
            let values: Vec<f64> = rows
                .iter()
                .filter_map(|song| song.numeric(field))
                .filter(|v| v.is_finite())
                .collect();
            FieldStats::from_values(values).map(|stats| (field.to_string(), stats))
        })
        .collect();

    Statistics {
        total_songs: rows.len(),
        statistics,
    }
}
