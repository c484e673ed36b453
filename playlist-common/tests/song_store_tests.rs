//! Integration tests for loading and querying the song store from disk
//!
//! Tests cover:
//! - Load + normalize of a column-oriented playlist document
//! - Paging, title search, rating updates and statistics on the loaded table
//! - CSV export reflecting rating changes
//! - Fail-fast behavior on malformed sources

use playlist_common::export;
use playlist_common::{Error, PageRequest, SongStore};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

/// Test helper: write a playlist document to a temp file
fn write_document(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    write!(file, "{}", value).expect("Should write document");
    file
}

fn playlist() -> serde_json::Value {
    json!({
        "id": {"0": "5vYA1mW9g2Coh1HUFUSmlb", "1": "2klCjJcucgGQysgH170npL", "2": "093PI3mdUvOSlvMYDwnV1e"},
        "title": {"0": "3AM", "1": "4 Walls", "2": "Crazy in Love"},
        "danceability": {"0": 0.521, "1": 0.735, "2": 0.664},
        "energy": {"0": 0.673, "1": 0.849, "2": 0.758},
        "key": {"0": 8, "1": 4, "2": 2},
        "acousticness": {"0": 0.00573, "1": 0.0158, "2": 0.00238},
        "valence": {"0": 0.543, "1": 0.833, "2": 0.681},
        "tempo": {"0": 108.031, "1": 125.972, "2": 99.259},
        "duration_ms": {"0": 225947, "1": 207477, "2": 236133},
        "num_bars": {"0": 100, "1": 107, "2": 97}
    })
}

#[test]
fn test_load_and_list() {
    let file = write_document(&playlist());
    let store = SongStore::load(file.path()).expect("Should load playlist");

    assert_eq!(store.len(), 3);
    assert_eq!(store.columns()[0], "id");

    let page = store.list_page(PageRequest::new(1, 2).unwrap());
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.songs[0].title, "3AM");
    assert_eq!(page.songs[1].duration_s, Some(207.477));

    let page = store.list_page(PageRequest::new(2, 2).unwrap());
    assert_eq!(page.songs.len(), 1);
    assert_eq!(page.songs[0].index, 2);
}

#[test]
fn test_search_then_rate() {
    let file = write_document(&playlist());
    let mut store = SongStore::load(file.path()).unwrap();

    let song = store.find_by_title("crazy").expect("Should find song");
    assert_eq!(song.id, "093PI3mdUvOSlvMYDwnV1e");
    assert_eq!(song.star_rating, 0);

    assert!(store.update_rating(&song.id, 5).unwrap());
    assert_eq!(store.find_by_title("crazy").unwrap().star_rating, 5);

    // The copy handed out earlier does not change
    assert_eq!(song.star_rating, 0);
}

#[test]
fn test_statistics_over_loaded_table() {
    let file = write_document(&playlist());
    let store = SongStore::load(file.path()).unwrap();

    let stats = store.statistics();
    assert_eq!(stats.total_songs, 3);
    for field in ["danceability", "energy", "acousticness", "tempo", "duration_s", "valence"] {
        let s = stats.statistics.get(field).expect("field should be reported");
        assert!(s.min <= s.median && s.median <= s.max, "{}", field);
        assert!(s.min <= s.mean && s.mean <= s.max, "{}", field);
    }
    assert_eq!(stats.statistics["tempo"].median, 108.031);
    assert_eq!(stats.statistics["duration_s"].max, 236.133);
}

#[test]
fn test_export_reflects_current_ratings() {
    let file = write_document(&playlist());
    let mut store = SongStore::load(file.path()).unwrap();
    store.update_rating("2klCjJcucgGQysgH170npL", 3).unwrap();

    let csv = export::to_csv(&store.snapshot());
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("index,id,title,"));
    assert!(lines[0].ends_with(",star_rating,duration_s"));
    assert!(lines[2].starts_with("1,2klCjJcucgGQysgH170npL,4 Walls,"));
    assert!(lines[2].ends_with(",3,207.477"));
}

#[test]
fn test_ragged_source_fails_fast() {
    let file = write_document(&json!({
        "id": {"0": "a", "1": "b"},
        "title": {"0": "Sunrise", "1": "Sunset"},
        "energy": {"0": 0.5}
    }));

    match SongStore::load(file.path()) {
        Err(Error::MalformedInput(msg)) => assert!(msg.contains("energy")),
        other => panic!("expected MalformedInput, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn test_empty_source_fails_fast() {
    let file = write_document(&json!({}));
    assert!(matches!(
        SongStore::load(file.path()),
        Err(Error::MalformedInput(_))
    ));
}
