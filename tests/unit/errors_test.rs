use giffire::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_not_loaded_display() {
    assert_eq!(
        StoreError::NotLoaded.to_string(),
        "Data store not loaded yet; refusing to overwrite"
    );
}

#[test]
fn store_error_io_display() {
    let err = StoreError::IoError("disk full".to_string());
    assert_eq!(err.to_string(), "Data store I/O error: disk full");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::NotLoaded);
    assert!(err.source().is_none());
}

// === HotkeyError Tests ===

#[test]
fn hotkey_error_display_variants() {
    assert_eq!(
        HotkeyError::AlreadyRegistered.to_string(),
        "Favorite hotkeys are already registered"
    );
    assert_eq!(
        HotkeyError::RegistrationFailed("Alt+Shift+3: taken".to_string()).to_string(),
        "Hotkey registration failed: Alt+Shift+3: taken"
    );
    assert_eq!(
        HotkeyError::InvalidSlot(12).to_string(),
        "Invalid hotkey slot: 12 (expected 1-9)"
    );
}

// === GiphyError Tests ===

#[test]
fn giphy_error_display_variants() {
    assert_eq!(GiphyError::MissingApiKey.to_string(), "No Giphy API key configured");
    assert_eq!(
        GiphyError::ApiError(403, "Forbidden".to_string()).to_string(),
        "Giphy API error (403): Forbidden"
    );
    assert_eq!(
        GiphyError::NetworkError("timed out".to_string()).to_string(),
        "Giphy network error: timed out"
    );
}

// === Clipboard / Notify Tests ===

#[test]
fn clipboard_and_notify_error_display() {
    assert_eq!(
        ClipboardError::Unavailable("no display".to_string()).to_string(),
        "Clipboard unavailable: no display"
    );
    assert_eq!(
        NotifyError::ShowFailed("no dbus".to_string()).to_string(),
        "Notification failed: no dbus"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_invalid_key_display() {
    let err = SettingsError::InvalidKey("giphy.nope".to_string());
    assert_eq!(err.to_string(), "Invalid settings key: giphy.nope");
}
