//! App Core for GIFfire.
//!
//! Central struct behind the RPC boundary: settings, the persisted library,
//! the GIF source and the toast slot.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

use crate::managers::favorites_manager::ToggleOutcome;
use crate::managers::library_manager::{FeedView, LibraryManager, LibraryManagerTrait};
use crate::managers::toast_manager::ToastManager;
use crate::services::data_store::DataStore;
use crate::services::giphy_client::{GifSource, GiphyClient};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::{GiphyError, SettingsError};
use crate::types::gif::Gif;
use crate::types::hotkey::HotkeySlot;
use crate::types::toast::{Toast, ToastKind};

pub const SEARCH_FAILED_MESSAGE: &str = "Failed to load GIFs";

/// Central application struct holding all managers and services.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub store: Arc<DataStore>,
    pub library: LibraryManager,
    pub toasts: ToastManager,
    source: Arc<dyn GifSource>,
    source_from_settings: bool,
    data_path_pinned: bool,
    trending: Vec<Gif>,
    search_results: Vec<Gif>,
    last_query: String,
}

impl App {
    /// Creates the app with a Giphy client built from the loaded settings.
    ///
    /// `data_path` wins over the `data_file` setting, which wins over the
    /// platform default.
    pub fn new(data_path: Option<PathBuf>, settings_path: Option<PathBuf>) -> Self {
        let settings_engine = load_settings(settings_path);
        let source = Arc::new(GiphyClient::new(settings_engine.get_settings().giphy.clone()));
        let mut app = Self::assemble(settings_engine, data_path, source);
        app.source_from_settings = true;
        app
    }

    /// Same as `new` but with a caller-supplied GIF source.
    pub fn with_source(
        data_path: Option<PathBuf>,
        settings_path: Option<PathBuf>,
        source: Arc<dyn GifSource>,
    ) -> Self {
        Self::assemble(load_settings(settings_path), data_path, source)
    }

    fn assemble(
        settings_engine: SettingsEngine,
        data_path: Option<PathBuf>,
        source: Arc<dyn GifSource>,
    ) -> Self {
        let settings = settings_engine.get_settings();
        let data_path_pinned = data_path.is_some();
        let data_path = data_path.or_else(|| settings.data_file.as_ref().map(PathBuf::from));
        let store = Arc::new(DataStore::new(data_path));
        let library = LibraryManager::new(store.clone());
        let toasts = ToastManager::new(Duration::from_millis(settings.toast_duration_ms));
        info!("Library file: {:?}", store.path());

        Self {
            settings_engine,
            store,
            library,
            toasts,
            source,
            source_from_settings: false,
            data_path_pinned,
            trending: Vec::new(),
            search_results: Vec::new(),
            last_query: String::new(),
        }
    }

    /// Shared handle to the GIF source, so lookups can run without the app lock.
    pub fn source(&self) -> Arc<dyn GifSource> {
        self.source.clone()
    }

    pub fn page_size(&self) -> usize {
        self.settings_engine.get_settings().giphy.page_size as usize
    }

    /// Updates one setting and applies it to the running app.
    ///
    /// Changing `data_file` moves the library to the new file, carrying the
    /// current document over once it has been loaded. It has no effect on the
    /// running app when the data path was given explicitly at start-up.
    pub fn set_setting(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        self.settings_engine.set_value(key, value)?;
        let settings = self.settings_engine.get_settings().clone();

        if key == "toast_duration_ms" {
            self.toasts
                .set_lifetime(Duration::from_millis(settings.toast_duration_ms));
        }
        if key == "data_file" && !self.data_path_pinned {
            self.move_library(settings.data_file.map(PathBuf::from));
        }
        if self.source_from_settings && key.starts_with("giphy") {
            self.source = Arc::new(GiphyClient::new(settings.giphy));
            self.trending.clear();
            self.search_results.clear();
            self.last_query.clear();
        }
        Ok(())
    }

    fn move_library(&mut self, data_path: Option<PathBuf>) {
        let store = Arc::new(DataStore::new(data_path));
        if store.path() == self.store.path() {
            return;
        }

        let mut library = LibraryManager::new(store.clone());
        if self.library.is_loaded() {
            library.load();
            if let Err(e) = library.replace(self.library.snapshot()) {
                warn!("Failed to carry library over to {:?}: {}", store.path(), e);
            }
        }
        info!("Library file moved to {:?}", store.path());
        self.store = store;
        self.library = library;
    }

    pub fn toggle_favorite(&mut self, gif: &Gif) -> ToggleOutcome {
        let outcome = self.library.toggle_favorite(gif);
        match outcome {
            ToggleOutcome::Added { .. } => self.toasts.show("Added to favorites", ToastKind::Success),
            ToggleOutcome::Removed => self.toasts.show("Removed from favorites", ToastKind::Success),
        }
        outcome
    }

    /// Returns false when `gif_id` is not a favorite.
    pub fn set_hotkey(&mut self, gif_id: &str, slot: HotkeySlot) -> bool {
        let updated = self.library.update_hotkey(gif_id, slot);
        if updated {
            self.toasts.show(format!("Hotkey {} assigned", slot), ToastKind::Success);
        }
        updated
    }

    /// Returns false when `gif_id` is not a favorite.
    pub fn remove_favorite(&mut self, gif_id: &str) -> bool {
        let removed = self.library.remove_favorite(gif_id);
        if removed {
            self.toasts.show("Removed from favorites", ToastKind::Success);
        }
        removed
    }

    /// Called after the overlay copied `gif`'s URL.
    pub fn record_use(&mut self, gif: &Gif) {
        self.library.record_use(gif);
        self.toasts.show("GIF URL copied to clipboard!", ToastKind::Success);
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn trending(&self) -> &[Gif] {
        &self.trending
    }

    /// Caches a search outcome. A failure becomes an empty result and an
    /// error toast.
    pub fn accept_search(&mut self, query: &str, result: Result<Vec<Gif>, GiphyError>) -> Vec<Gif> {
        self.last_query = query.trim().to_string();
        self.search_results = match result {
            Ok(gifs) => gifs,
            Err(e) => {
                warn!("Search for '{}' failed: {}", self.last_query, e);
                self.toasts.show(SEARCH_FAILED_MESSAGE, ToastKind::Error);
                Vec::new()
            }
        };
        self.search_results.clone()
    }

    /// Caches trending GIFs. A failure is only logged and keeps the old cache.
    pub fn accept_trending(&mut self, result: Result<Vec<Gif>, GiphyError>) -> Vec<Gif> {
        match result {
            Ok(gifs) => self.trending = gifs,
            Err(e) => warn!("Failed to load trending GIFs: {}", e),
        }
        self.trending.clone()
    }

    pub fn feed(&self, view: FeedView) -> Vec<Gif> {
        self.library
            .feed(view, &self.search_results, &self.trending, self.page_size())
    }

    pub fn current_toast(&mut self) -> Option<Toast> {
        self.toasts.current()
    }
}

fn load_settings(settings_path: Option<PathBuf>) -> SettingsEngine {
    let mut engine = SettingsEngine::new(settings_path);
    if let Err(e) = engine.load() {
        warn!("Using default settings: {}", e);
    }
    engine
}
