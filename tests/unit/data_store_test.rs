//! Unit tests for the JSON file data store.
//!
//! Covers the empty-document fallbacks, whole-document replacement and the
//! on-disk field names other readers of `data.json` depend on.

use std::fs;

use giffire::services::data_store::{DataStore, DataStoreTrait};
use giffire::types::gif::Gif;
use giffire::types::errors::StoreError;
use giffire::types::hotkey::HotkeySlot;
use giffire::types::library::{FavoriteGif, LauncherData, RecentGif};
use serde_json::Value;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> DataStore {
    DataStore::new(Some(dir.path().join("data.json")))
}

fn sample_document() -> LauncherData {
    LauncherData {
        favorites: vec![
            FavoriteGif {
                gif: Gif::new("cat", "Cat", "https://media.giphy.com/cat.gif", 200, 150),
                hotkey: HotkeySlot::new(1),
            },
            FavoriteGif {
                gif: Gif::new("dog", "Dog", "https://media.giphy.com/dog.gif", 200, 200),
                hotkey: None,
            },
        ],
        recents: vec![RecentGif {
            gif: Gif::new("cat", "Cat", "https://media.giphy.com/cat.gif", 200, 150),
            used_at: 1_700_000_000_000,
        }],
    }
}

#[test]
fn test_read_of_missing_file_is_empty_document() {
    let dir = TempDir::new().unwrap();
    let data = store_in(&dir).read();
    assert!(data.favorites.is_empty());
    assert!(data.recents.is_empty());
}

#[test]
fn test_read_of_wrong_shape_is_empty_document() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), r#"{"favorites": 3}"#).unwrap();
    assert_eq!(store_in(&dir).read(), LauncherData::default());
}

#[test]
fn test_read_of_document_with_missing_lists_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();
    assert_eq!(store_in(&dir).read(), LauncherData::default());
}

#[test]
fn test_write_then_read_returns_same_document() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (_, loaded) = store.load();

    store.write(&loaded, &sample_document()).unwrap();

    assert_eq!(store.read(), sample_document());
}

#[test]
fn test_write_replaces_whole_document() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (_, loaded) = store.load();
    store.write(&loaded, &sample_document()).unwrap();

    store.write(&loaded, &LauncherData::default()).unwrap();

    assert_eq!(store.read(), LauncherData::default());
}

#[test]
fn test_on_disk_field_names() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (_, loaded) = store.load();
    store.write(&loaded, &sample_document()).unwrap();

    let raw: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    let first = &raw["favorites"][0];
    assert_eq!(first["id"], "cat");
    assert_eq!(first["hotkey"], 1);
    assert_eq!(first["images"]["fixed_height"]["url"], "https://media.giphy.com/cat.gif");
    assert!(raw["favorites"][1].get("hotkey").is_none());
    assert_eq!(raw["recents"][0]["usedAt"], 1_700_000_000_000i64);
}

#[test]
fn test_write_leaves_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (_, loaded) = store.load();
    store.write(&loaded, &sample_document()).unwrap();
    store.write(&loaded, &sample_document()).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_reads_documents_written_with_string_dimensions() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("data.json"),
        r#"{"favorites":[{"id":"x","title":"X","images":{"fixed_height":{"url":"u","width":"200","height":"113"}},"hotkey":4}],"recents":[]}"#,
    )
    .unwrap();

    let data = store_in(&dir).read();
    assert_eq!(data.favorites[0].gif.images.fixed_height.height, 113);
    assert_eq!(data.favorites[0].hotkey, HotkeySlot::new(4));
}

/// A write that cannot complete leaves the previous document byte for byte.
#[test]
fn test_failed_write_leaves_previous_document() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let (_, loaded) = store.load();
    store.write(&loaded, &sample_document()).unwrap();
    let before = fs::read(store.path()).unwrap();

    // The document file itself sits where this store needs a directory.
    let blocked = DataStore::new(Some(store.path().join("data.json")));
    let (_, blocked_loaded) = blocked.load();
    let result = blocked.write(&blocked_loaded, &LauncherData::default());

    assert!(matches!(result, Err(StoreError::IoError(_))));
    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert_eq!(store.read(), sample_document());
}

#[test]
fn test_failed_replace_keeps_target_and_cleans_up() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("data.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "keep").unwrap();

    let store = DataStore::new(Some(target.clone()));
    let (_, loaded) = store.load();
    let result = store.write(&loaded, &sample_document());

    assert!(matches!(result, Err(StoreError::IoError(_))));
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "temp file must not be left behind");
}
