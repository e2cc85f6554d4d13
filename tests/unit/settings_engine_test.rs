//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use giffire::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use giffire::types::settings::LauncherSettings;
use serde_json::json;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(dir.path().join("settings.json")))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, LauncherSettings::default());
    assert_eq!(settings.giphy.page_size, 500);
    assert_eq!(settings.toast_duration_ms, 3000);
    assert!(settings.giphy.api_key.is_empty(), "No key may be built in");
}

/// A change must reach disk so a fresh engine on the same file sees it.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine.set_value("giphy.rating", json!("pg")).unwrap();
        engine.set_value("toast_duration_ms", json!(1500)).unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.giphy.rating, "pg");
    assert_eq!(settings.toast_duration_ms, 1500);
}

#[test]
fn test_optional_data_file_can_be_set() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine.set_value("data_file", json!("/tmp/elsewhere.json")).unwrap();

    assert_eq!(
        engine.get_settings().data_file.as_deref(),
        Some("/tmp/elsewhere.json")
    );
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.set_value("giphy.page_size", json!(50)).unwrap();

    engine.reset().unwrap();

    assert_eq!(*engine.get_settings(), LauncherSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), LauncherSettings::default());
}

#[test]
fn test_config_path_matches_override() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert_eq!(engine.get_config_path(), dir.path().join("settings.json"));
}
