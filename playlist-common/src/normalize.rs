//! Column-to-row normalization
//!
//! The source document maps attribute name to `{row index as string: value}`.
//! Normalization turns it into an ordered [`Table`] of [`Song`] rows and adds
//! the derived `index`, `star_rating` and `duration_s` fields.
//!
//! The row count is taken from the first attribute. Other attributes are only
//! checked for the keys `"0".."N-1"`; extra keys beyond that are not detected.

use crate::model::{Song, Table, DERIVED_FIELDS, DURATION_MS_COLUMN, ID_COLUMN, TITLE_COLUMN};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// Column-oriented source document: attribute -> row index -> value
pub type SourceDocument = Map<String, Value>;

/// Read and parse a source document from disk
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::MalformedInput(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        Error::MalformedInput(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    match value {
        Value::Object(document) => Ok(document),
        _ => Err(Error::MalformedInput(format!(
            "{}: top-level JSON value must be an object of attributes",
            path.display()
        ))),
    }
}

/// Load a source document from disk and normalize it
pub fn load_table(path: &Path) -> Result<Table> {
    let document = load_document(path)?;
    info!("Loaded JSON data with {} attributes", document.len());

    let table = normalize(&document)?;
    info!(
        "Normalized {} songs with columns: {}",
        table.len(),
        table.columns.join(", ")
    );
    Ok(table)
}

/// Convert a column-oriented document into a row-oriented table
pub fn normalize(document: &SourceDocument) -> Result<Table> {
    let mut columns: Vec<(&str, &Map<String, Value>)> = Vec::with_capacity(document.len());
    for (name, values) in document {
        if DERIVED_FIELDS.contains(&name.as_str()) {
            return Err(Error::MalformedInput(format!(
                "Attribute '{}' collides with a derived field",
                name
            )));
        }
        let values = values.as_object().ok_or_else(|| {
            Error::MalformedInput(format!(
                "Attribute '{}' must map row indices to values",
                name
            ))
        })?;
        columns.push((name.as_str(), values));
    }

    let row_count = match columns.first() {
        Some((_, values)) => values.len(),
        None => {
            return Err(Error::MalformedInput(
                "Document has no attributes".to_string(),
            ))
        }
    };
    debug!("Processing {} songs", row_count);

    let id_column = required_column(document, ID_COLUMN)?;
    let title_column = required_column(document, TITLE_COLUMN)?;

    let mut rows = Vec::with_capacity(row_count);
    for index in 0..row_count {
        let key = index.to_string();

        let id = string_cell(ID_COLUMN, id_column, &key)?;
        let title = string_cell(TITLE_COLUMN, title_column, &key)?;

        let mut attributes = Map::new();
        for (name, values) in &columns {
            let value = cell(name, values, &key)?;
            if *name == ID_COLUMN || *name == TITLE_COLUMN {
                continue;
            }
            attributes.insert((*name).to_string(), value.clone());
        }

        let duration_s = match attributes.get(DURATION_MS_COLUMN) {
            None | Some(Value::Null) => None,
            Some(value) => {
                let ms = value.as_f64().ok_or_else(|| {
                    Error::MalformedInput(format!(
                        "'{}' for row {} is not a number: {}",
                        DURATION_MS_COLUMN, key, value
                    ))
                })?;
                Some(ms / 1000.0)
            }
        };

        rows.push(Song {
            index,
            id,
            title,
            attributes,
            star_rating: 0,
            duration_s,
        });
    }

    Ok(Table {
        columns: columns.iter().map(|(name, _)| name.to_string()).collect(),
        rows,
    })
}

fn required_column<'a>(
    document: &'a SourceDocument,
    name: &str,
) -> Result<&'a Map<String, Value>> {
    document
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::MalformedInput(format!("Required attribute '{}' is missing", name)))
}

fn cell<'a>(name: &str, values: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    values.get(key).ok_or_else(|| {
        Error::MalformedInput(format!(
            "Attribute '{}' has no value for row {}",
            name, key
        ))
    })
}

fn string_cell(name: &str, values: &Map<String, Value>, key: &str) -> Result<String> {
    match cell(name, values, key)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(Error::MalformedInput(format!(
            "'{}' for row {} must be a string, got {}",
            name, key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn document(value: Value) -> SourceDocument {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    fn sample() -> SourceDocument {
        document(json!({
            "id": {"0": "a", "1": "b"},
            "title": {"0": "Sunrise", "1": "Sunset"},
            "danceability": {"0": 0.5, "1": 0.7},
            "key": {"0": 1, "1": 7},
            "duration_ms": {"0": 180000, "1": 200000}
        }))
    }

    #[test]
    fn test_normalize_builds_rows_in_order() {
        let table = normalize(&sample()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns,
            vec!["id", "title", "danceability", "key", "duration_ms"]
        );

        let first = &table.rows[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.id, "a");
        assert_eq!(first.title, "Sunrise");
        assert_eq!(first.star_rating, 0);
        assert_eq!(first.duration_s, Some(180.0));

        let second = &table.rows[1];
        assert_eq!(second.index, 1);
        assert_eq!(second.id, "b");
        assert_eq!(second.duration_s, Some(200.0));
    }

    #[test]
    fn test_source_values_preserved() {
        let source = sample();
        let table = normalize(&source).unwrap();

        for song in &table.rows {
            let key = song.index.to_string();
            for (attribute, values) in &source {
                assert_eq!(
                    song.value(attribute).as_ref(),
                    values.get(&key),
                    "attribute {} row {}",
                    attribute,
                    key
                );
            }
        }
        // Integer stays integer, float stays float
        assert!(table.rows[0].attributes["key"].is_i64());
        assert!(table.rows[0].attributes["danceability"].is_f64());
    }

    #[test]
    fn test_without_duration_has_no_derived_field() {
        let source = document(json!({
            "id": {"0": "a"},
            "title": {"0": "Only"}
        }));

        let table = normalize(&source).unwrap();
        assert_eq!(table.rows[0].duration_s, None);
        assert!(!table.has_duration());
    }

    #[test]
    fn test_duration_exact_division() {
        let source = document(json!({
            "id": {"0": "a", "1": "b"},
            "title": {"0": "x", "1": "y"},
            "duration_ms": {"0": 1, "1": 123457}
        }));

        let table = normalize(&source).unwrap();
        assert_eq!(table.rows[0].duration_s, Some(1.0 / 1000.0));
        assert_eq!(table.rows[1].duration_s, Some(123457.0 / 1000.0));
    }

    #[test]
    fn test_empty_document_rejected() {
        let result = normalize(&Map::new());
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let source = document(json!({
            "id": {"0": "a", "1": "b"},
            "title": {"0": "Sunrise"}
        }));

        match normalize(&source) {
            Err(Error::MalformedInput(msg)) => assert!(msg.contains("title")),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_id_column_rejected() {
        let source = document(json!({
            "title": {"0": "Sunrise"}
        }));
        assert!(matches!(normalize(&source), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_non_string_id_rejected() {
        let source = document(json!({
            "id": {"0": 17},
            "title": {"0": "Sunrise"}
        }));
        assert!(matches!(normalize(&source), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_derived_field_name_collision_rejected() {
        let source = document(json!({
            "id": {"0": "a"},
            "title": {"0": "Sunrise"},
            "star_rating": {"0": 5}
        }));
        assert!(matches!(normalize(&source), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_attribute_not_an_object_rejected() {
        let source = document(json!({
            "id": ["a", "b"],
            "title": {"0": "Sunrise", "1": "Sunset"}
        }));
        assert!(matches!(normalize(&source), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_zero_rows_is_empty_table() {
        let source = document(json!({"id": {}, "title": {}}));
        let table = normalize(&source).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", Value::Object(sample())).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_table(&dir.path().join("playlist.json"));
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_load_unparseable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"id\": {{\"0\": ").unwrap();

        let result = load_table(file.path());
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }

    #[test]
    fn test_load_non_object_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let result = load_document(file.path());
        assert!(matches!(result, Err(Error::MalformedInput(_))));
    }
}
