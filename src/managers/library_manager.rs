//! Library Manager for GIFfire.
//!
//! Holds the in-memory copy of favorites and recents the overlay works on and
//! pushes every change back to the data store as a whole-document write.
//! Writes are held back until the document has been loaded once; otherwise a
//! cold start would overwrite the saved favorites with empty defaults.

use std::sync::Arc;

use log::{debug, error, info};

use crate::managers::favorites_manager::{self, ToggleOutcome};
use crate::managers::recents_manager::{self, now_millis};
use crate::services::data_store::{DataStoreTrait, Loaded};
use crate::types::errors::StoreError;
use crate::types::gif::Gif;
use crate::types::hotkey::HotkeySlot;
use crate::types::library::{FavoriteGif, LauncherData, RecentGif};

/// Which list the overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    /// The favorites tab.
    Favorites,
    /// Results for a non-empty search term.
    Search,
    /// No search term: recents first, then trending.
    Home,
}

/// Trait defining library operations.
pub trait LibraryManagerTrait {
    fn load(&mut self) -> LauncherData;
    fn is_loaded(&self) -> bool;
    fn snapshot(&self) -> LauncherData;
    fn favorites(&self) -> &[FavoriteGif];
    fn recents(&self) -> &[RecentGif];
    fn is_favorited(&self, gif_id: &str) -> bool;
    fn toggle_favorite(&mut self, gif: &Gif) -> ToggleOutcome;
    fn update_hotkey(&mut self, gif_id: &str, hotkey: HotkeySlot) -> bool;
    fn remove_favorite(&mut self, gif_id: &str) -> bool;
    fn record_use(&mut self, gif: &Gif);
    fn replace(&mut self, data: LauncherData) -> Result<(), StoreError>;
    fn sync(&self) -> Result<(), StoreError>;
}

/// The overlay's working copy of the persisted document.
pub struct LibraryManager {
    store: Arc<dyn DataStoreTrait>,
    loaded: Option<Loaded>,
    favorites: Vec<FavoriteGif>,
    recents: Vec<RecentGif>,
}

impl LibraryManager {
    pub fn new(store: Arc<dyn DataStoreTrait>) -> Self {
        Self {
            store,
            loaded: None,
            favorites: Vec::new(),
            recents: Vec::new(),
        }
    }

    /// Syncs after a mutation. Failures are logged and otherwise ignored; the
    /// in-memory state stays authoritative and the next write carries it.
    fn sync_after_change(&self) {
        match self.sync() {
            Ok(()) => {}
            Err(StoreError::NotLoaded) => debug!("Library not loaded yet, write deferred"),
            Err(e) => error!("Failed to save library: {}", e),
        }
    }

    /// Items the overlay should display for `view`.
    ///
    /// On the home view recents come first, followed by trending GIFs that are
    /// not already among the recents, capped at `limit`.
    pub fn feed(&self, view: FeedView, search_results: &[Gif], trending: &[Gif], limit: usize) -> Vec<Gif> {
        match view {
            FeedView::Favorites => self.favorites.iter().map(|f| f.gif.clone()).collect(),
            FeedView::Search => search_results.iter().take(limit).cloned().collect(),
            FeedView::Home if self.recents.is_empty() => trending.iter().take(limit).cloned().collect(),
            FeedView::Home => self
                .recents
                .iter()
                .map(|r| r.gif.clone())
                .chain(
                    trending
                        .iter()
                        .filter(|g| !self.recents.iter().any(|r| r.gif.id == g.id))
                        .cloned(),
                )
                .take(limit)
                .collect(),
        }
    }
}

impl LibraryManagerTrait for LibraryManager {
    /// Reads the persisted document into memory and unlocks writes.
    fn load(&mut self) -> LauncherData {
        let (data, token) = self.store.load();
        info!(
            "Library loaded: {} favorites, {} recents",
            data.favorites.len(),
            data.recents.len()
        );
        self.favorites = data.favorites.clone();
        self.recents = data.recents.clone();
        self.loaded = Some(token);
        data
    }

    fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn snapshot(&self) -> LauncherData {
        LauncherData {
            favorites: self.favorites.clone(),
            recents: self.recents.clone(),
        }
    }

    fn favorites(&self) -> &[FavoriteGif] {
        &self.favorites
    }

    fn recents(&self) -> &[RecentGif] {
        &self.recents
    }

    fn is_favorited(&self, gif_id: &str) -> bool {
        favorites_manager::is_favorited(&self.favorites, gif_id)
    }

    fn toggle_favorite(&mut self, gif: &Gif) -> ToggleOutcome {
        let (favorites, outcome) = favorites_manager::toggle_favorite(gif, &self.favorites);
        self.favorites = favorites;
        debug!("Toggled favorite {}: {:?}", gif.id, outcome);
        self.sync_after_change();
        outcome
    }

    /// Returns false when `gif_id` is not a favorite.
    fn update_hotkey(&mut self, gif_id: &str, hotkey: HotkeySlot) -> bool {
        if !self.is_favorited(gif_id) {
            return false;
        }
        self.favorites = favorites_manager::update_hotkey(&self.favorites, gif_id, hotkey);
        self.sync_after_change();
        true
    }

    /// Returns false when `gif_id` is not a favorite.
    fn remove_favorite(&mut self, gif_id: &str) -> bool {
        if !self.is_favorited(gif_id) {
            return false;
        }
        self.favorites = favorites_manager::remove_favorite(&self.favorites, gif_id);
        self.sync_after_change();
        true
    }

    fn record_use(&mut self, gif: &Gif) {
        self.recents = recents_manager::add_to_recents(&self.recents, gif, now_millis());
        self.sync_after_change();
    }

    /// Replaces the whole document, as sent by the overlay. Refused before
    /// `load`, in which case neither memory nor disk changes.
    fn replace(&mut self, data: LauncherData) -> Result<(), StoreError> {
        if self.loaded.is_none() {
            return Err(StoreError::NotLoaded);
        }
        self.favorites = data.favorites;
        self.recents = data.recents;
        self.sync()
    }

    fn sync(&self) -> Result<(), StoreError> {
        let loaded = self.loaded.as_ref().ok_or(StoreError::NotLoaded)?;
        self.store.write(loaded, &self.snapshot())
    }
}
