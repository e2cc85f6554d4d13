pub mod clipboard;
pub mod data_store;
pub mod giphy_client;
pub mod global_hotkeys;
pub mod notifier;
pub mod settings_engine;
