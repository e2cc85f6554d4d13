use std::fmt;

// === StoreError ===

/// Errors related to persisting the favorites/recents document.
///
/// Reads never produce a `StoreError`; they fall back to the empty document.
#[derive(Debug)]
pub enum StoreError {
    /// A write was attempted before the document had been read.
    NotLoaded,
    /// An I/O error occurred while writing the document.
    IoError(String),
    /// The document could not be serialized.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotLoaded => write!(f, "Data store not loaded yet; refusing to overwrite"),
            StoreError::IoError(msg) => write!(f, "Data store I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Data store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === HotkeyError ===

/// Errors related to global hotkey registration.
#[derive(Debug)]
pub enum HotkeyError {
    /// The dispatcher already holds its bindings.
    AlreadyRegistered,
    /// The OS refused to register the given combination.
    RegistrationFailed(String),
    /// The value is not a hotkey slot in 1..=9.
    InvalidSlot(i64),
}

impl fmt::Display for HotkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotkeyError::AlreadyRegistered => write!(f, "Favorite hotkeys are already registered"),
            HotkeyError::RegistrationFailed(msg) => {
                write!(f, "Hotkey registration failed: {}", msg)
            }
            HotkeyError::InvalidSlot(value) => {
                write!(f, "Invalid hotkey slot: {} (expected 1-9)", value)
            }
        }
    }
}

impl std::error::Error for HotkeyError {}

// === GiphyError ===

/// Errors related to the Giphy item source.
#[derive(Debug)]
pub enum GiphyError {
    /// No API key has been configured.
    MissingApiKey,
    /// A network error occurred while talking to Giphy.
    NetworkError(String),
    /// Giphy answered with a non-success status.
    ApiError(u16, String),
    /// The response body could not be decoded.
    ParseError(String),
}

impl fmt::Display for GiphyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GiphyError::MissingApiKey => write!(f, "No Giphy API key configured"),
            GiphyError::NetworkError(msg) => write!(f, "Giphy network error: {}", msg),
            GiphyError::ApiError(status, msg) => {
                write!(f, "Giphy API error ({}): {}", status, msg)
            }
            GiphyError::ParseError(msg) => write!(f, "Giphy response parse error: {}", msg),
        }
    }
}

impl std::error::Error for GiphyError {}

// === ClipboardError ===

/// Errors related to writing the system clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// The host has no usable clipboard.
    Unavailable(String),
    /// The clipboard rejected the write.
    WriteFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            ClipboardError::WriteFailed(msg) => write!(f, "Clipboard write failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// === NotifyError ===

/// Errors related to OS desktop notifications.
#[derive(Debug)]
pub enum NotifyError {
    /// The notification could not be shown.
    ShowFailed(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::ShowFailed(msg) => write!(f, "Notification failed: {}", msg),
        }
    }
}

impl std::error::Error for NotifyError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
