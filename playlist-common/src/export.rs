//! CSV export of the song table
//!
//! Column order is `index`, the source attributes in document order,
//! `star_rating`, then `duration_s` when the source carried `duration_ms`.
//! Absent values become empty cells; strings containing a comma, quote or
//! newline are quoted with doubled inner quotes.

use crate::model::{Table, DURATION_S_FIELD, INDEX_FIELD, STAR_RATING_FIELD};
use crate::Result;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Header names in output order
pub fn csv_columns(table: &Table) -> Vec<&str> {
    let mut columns = Vec::with_capacity(table.columns.len() + 3);
    columns.push(INDEX_FIELD);
    columns.extend(table.columns.iter().map(String::as_str));
    columns.push(STAR_RATING_FIELD);
    if table.has_duration() {
        columns.push(DURATION_S_FIELD);
    }
    columns
}

/// Render the whole table as CSV text
pub fn to_csv(table: &Table) -> String {
    let columns = csv_columns(table);
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| escape(c)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for song in &table.rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| match song.value(column) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => escape(&s),
                Some(other) => escape(&other.to_string()),
            })
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Write the table as CSV to `path`, creating parent directories
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, to_csv(table))?;
    info!("Exported {} songs to {}", table.len(), path.display());
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
