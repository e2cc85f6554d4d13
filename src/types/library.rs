use serde::{Deserialize, Serialize};

use super::gif::Gif;
use super::hotkey::HotkeySlot;

/// A favorited GIF, optionally bound to a global hotkey slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteGif {
    #[serde(flatten)]
    pub gif: Gif,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<HotkeySlot>,
}

/// A recently copied GIF. `used_at` is milliseconds since the UNIX epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentGif {
    #[serde(flatten)]
    pub gif: Gif,
    #[serde(rename = "usedAt")]
    pub used_at: i64,
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LauncherData {
    #[serde(default)]
    pub favorites: Vec<FavoriteGif>,
    #[serde(default)]
    pub recents: Vec<RecentGif>,
}

impl LauncherData {
    /// The first favorite bound to `slot`.
    pub fn favorite_for(&self, slot: HotkeySlot) -> Option<&FavoriteGif> {
        self.favorites.iter().find(|f| f.hotkey == Some(slot))
    }
}
