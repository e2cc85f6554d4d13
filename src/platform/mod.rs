// GIFfire platform abstraction
// Provides the per-user locations of the settings file and the favorites/recents document.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// File name of the persisted favorites/recents document.
pub const DATA_FILE_NAME: &str = "data.json";

/// File name of the launcher settings.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Returns the platform-specific configuration directory for GIFfire.
///
/// - **Linux**: `~/.config/giffire` (or `$XDG_CONFIG_HOME/giffire`)
/// - **macOS**: `~/Library/Application Support/GIFfire`
/// - **Windows**: `%APPDATA%/GIFfire`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for GIFfire.
///
/// - **Linux**: `~/.local/share/giffire` (or `$XDG_DATA_HOME/giffire`)
/// - **macOS**: `~/Library/Application Support/GIFfire`
/// - **Windows**: `%APPDATA%/GIFfire`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default location of the favorites/recents document.
pub fn default_data_file() -> PathBuf {
    get_data_dir().join(DATA_FILE_NAME)
}

/// Default location of the settings file.
pub fn default_settings_file() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE_NAME)
}
