pub mod favorites_manager;
pub mod hotkey_dispatcher;
pub mod library_manager;
pub mod recents_manager;
pub mod toast_manager;
