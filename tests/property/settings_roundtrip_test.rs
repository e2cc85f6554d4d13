//! Property-based tests for LauncherSettings serialization round-trip.
//!
//! Settings survive both a JSON round-trip and a save/load through the
//! SettingsEngine for arbitrary valid inputs.

use giffire::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use giffire::types::settings::{GiphySettings, LauncherSettings};
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn arb_giphy_settings() -> impl Strategy<Value = GiphySettings> {
    (
        "[a-zA-Z0-9]{0,32}",
        "https://[a-z]{3,10}\\.example/v1/gifs",
        1u32..=500,
        prop_oneof![Just("g"), Just("pg"), Just("pg-13"), Just("r")],
    )
        .prop_map(|(api_key, base_url, page_size, rating)| GiphySettings {
            api_key,
            base_url,
            page_size,
            rating: rating.to_string(),
        })
}

fn arb_settings() -> impl Strategy<Value = LauncherSettings> {
    (
        arb_giphy_settings(),
        0u64..60_000,
        proptest::option::of("/[a-z]{1,8}/data\\.json"),
    )
        .prop_map(|(giphy, toast_duration_ms, data_file)| LauncherSettings {
            giphy,
            toast_duration_ms,
            data_file,
        })
}

proptest! {
    #[test]
    fn prop_settings_json_roundtrip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: LauncherSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn prop_set_value_survives_reload(page_size in 1u32..=500, duration in 0u64..60_000) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        {
            let mut engine = SettingsEngine::new(Some(path.clone()));
            engine.load().unwrap();
            engine.set_value("giphy.page_size", json!(page_size)).unwrap();
            engine.set_value("toast_duration_ms", json!(duration)).unwrap();
        }

        let mut engine = SettingsEngine::new(Some(path));
        let loaded = engine.load().unwrap();
        prop_assert_eq!(loaded.giphy.page_size, page_size);
        prop_assert_eq!(loaded.toast_duration_ms, duration);
    }
}
