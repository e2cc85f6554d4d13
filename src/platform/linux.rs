// GIFfire platform paths for Linux
// Config: ~/.config/giffire
// Data:   ~/.local/share/giffire

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Uses `$XDG_CONFIG_HOME/giffire` if set, otherwise `~/.config/giffire`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("giffire"),
        _ => home_dir().join(".config").join("giffire"),
    }
}

/// Uses `$XDG_DATA_HOME/giffire` if set, otherwise `~/.local/share/giffire`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("giffire"),
        _ => home_dir().join(".local").join("share").join("giffire"),
    }
}
