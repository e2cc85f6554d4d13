//! RPC method handler for the GIFfire JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches each call to the `App`. The app lock is never
//! held across a Giphy request.

use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::favorites_manager::ToggleOutcome;
use crate::managers::library_manager::{FeedView, LibraryManagerTrait};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::gif::Gif;
use crate::types::hotkey::HotkeySlot;
use crate::types::library::LauncherData;

/// Method whose success tells the window owner to hide the overlay.
pub const CLOSE_METHOD: &str = "app.close";

/// Methods the rate limiter never rejects. Dropping the last `data.write` of a
/// burst would leave a stale document on disk.
const UNLIMITED_METHODS: &[&str] = &["data.write", CLOSE_METHOD];

/// Simple rate limiter: max requests per second.
pub struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    pub fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if `method` may run now, false if rate-limited.
    /// Exempt methods are always admitted and do not use up the budget.
    pub fn check(&mut self, method: &str) -> bool {
        if UNLIMITED_METHODS.contains(&method) {
            return true;
        }
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn parse_gif(params: &Value) -> Result<Gif, String> {
    let raw = params.get("gif").cloned().ok_or("missing gif")?;
    serde_json::from_value(raw).map_err(|e| format!("invalid gif: {}", e))
}

fn parse_id(params: &Value) -> Result<&str, String> {
    params
        .get("id")
        .and_then(|v| v.as_str())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| "missing id".to_string())
}

fn parse_view(params: &Value) -> Result<FeedView, String> {
    match params.get("view").and_then(|v| v.as_str()).unwrap_or("home") {
        "favorites" => Ok(FeedView::Favorites),
        "search" => Ok(FeedView::Search),
        "home" => Ok(FeedView::Home),
        other => Err(format!("unknown view: {}", other)),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true, "version": env!("CARGO_PKG_VERSION")})),

        // ─── Document ───
        "data.read" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let data = a.library.load();
            serde_json::to_value(data).map_err(|e| e.to_string())
        }
        "data.write" => {
            let data: LauncherData = match serde_json::from_value(params.clone()) {
                Ok(d) => d,
                Err(e) => return Ok(json!({"success": false, "error": format!("invalid document: {}", e)})),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.library.replace(data) {
                Ok(()) => Ok(json!({"success": true})),
                Err(e) => Ok(json!({"success": false, "error": e.to_string()})),
            }
        }
        CLOSE_METHOD => Ok(json!({"ok": true})),

        // ─── Favorites ───
        "favorites.toggle" => {
            let gif = parse_gif(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.toggle_favorite(&gif) {
                ToggleOutcome::Added { hotkey } => Ok(json!({"favorited": true, "hotkey": hotkey})),
                ToggleOutcome::Removed => Ok(json!({"favorited": false, "hotkey": null})),
            }
        }
        "favorites.set_hotkey" => {
            let id = parse_id(params)?;
            let raw = params.get("hotkey").and_then(|v| v.as_i64()).ok_or("missing hotkey")?;
            let slot = HotkeySlot::try_from(raw).map_err(|e| e.to_string())?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.set_hotkey(id, slot) {
                return Err(format!("not a favorite: {}", id));
            }
            Ok(json!({"ok": true}))
        }
        "favorites.remove" => {
            let id = parse_id(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.remove_favorite(id) {
                return Err(format!("not a favorite: {}", id));
            }
            Ok(json!({"ok": true}))
        }
        "favorites.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.library.favorites()).map_err(|e| e.to_string())
        }

        // ─── Recents ───
        "recents.add" => {
            let gif = parse_gif(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.record_use(&gif);
            serde_json::to_value(a.library.recents()).map_err(|e| e.to_string())
        }

        // ─── GIFs ───
        "gifs.search" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let source = app.lock().map_err(|e| e.to_string())?.source();
            let result = source.search(query).await;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.accept_search(query, result)))
        }
        "gifs.trending" => {
            let source = app.lock().map_err(|e| e.to_string())?.source();
            let result = source.trending().await;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.accept_trending(result)))
        }
        "gifs.feed" => {
            let mut view = parse_view(params)?;
            let query = params
                .get("query")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .trim()
                .to_string();
            if view == FeedView::Home && !query.is_empty() {
                view = FeedView::Search;
            }

            let (source, need_search, need_trending) = {
                let a = app.lock().map_err(|e| e.to_string())?;
                (
                    a.source(),
                    view == FeedView::Search && a.last_query() != query,
                    view == FeedView::Home && a.trending().is_empty(),
                )
            };
            if need_search {
                let result = source.search(&query).await;
                app.lock().map_err(|e| e.to_string())?.accept_search(&query, result);
            }
            if need_trending {
                let result = source.trending().await;
                app.lock().map_err(|e| e.to_string())?.accept_trending(result);
            }

            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.feed(view)))
        }

        // ─── Toasts ───
        "toast.current" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.current_toast()))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_setting(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
