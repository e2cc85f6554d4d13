use serde::{Deserialize, Serialize};

/// Top-level launcher settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LauncherSettings {
    pub giphy: GiphySettings,
    /// How long a toast stays visible.
    pub toast_duration_ms: u64,
    /// Overrides the default location of `data.json`.
    #[serde(default)]
    pub data_file: Option<String>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            giphy: GiphySettings::default(),
            toast_duration_ms: 3000,
            data_file: None,
        }
    }
}

/// Giphy item source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiphySettings {
    /// Empty means "not configured"; see `GIFFIRE_GIPHY_API_KEY`.
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
    pub rating: String,
}

impl Default for GiphySettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.giphy.com/v1/gifs".to_string(),
            page_size: 500,
            rating: "g".to_string(),
        }
    }
}
