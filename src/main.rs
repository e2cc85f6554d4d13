//! GIFfire hotkey daemon.
//!
//! Binds Alt+Shift+1..9 and copies the favorite currently holding the pressed
//! slot to the clipboard. On macOS and Windows, and on Linux with the `gui`
//! feature, the hotkeys are pumped by a `tao` event loop; otherwise the process
//! blocks on the hotkey channel, which is enough on Linux/X11.

use std::path::PathBuf;
use std::sync::Arc;

use giffire::logging;
use giffire::managers::hotkey_dispatcher::HotkeyDispatcher;
use giffire::services::clipboard::SystemClipboard;
use giffire::services::data_store::DataStore;
use giffire::services::notifier::DesktopNotifier;
use giffire::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use log::{info, warn};

fn build_dispatcher() -> HotkeyDispatcher {
    let mut settings = SettingsEngine::new(std::env::var_os("GIFFIRE_SETTINGS_FILE").map(PathBuf::from));
    if let Err(e) = settings.load() {
        warn!("Using default settings: {}", e);
    }
    let settings = settings.get_settings();

    let data_file = std::env::var_os("GIFFIRE_DATA_FILE")
        .map(PathBuf::from)
        .or_else(|| settings.data_file.as_ref().map(PathBuf::from));
    let store = Arc::new(DataStore::new(data_file));
    info!("Resolving favorites from {:?}", store.path());

    let timeout_ms = u32::try_from(settings.toast_duration_ms).unwrap_or(u32::MAX);
    HotkeyDispatcher::new(
        store,
        Box::new(SystemClipboard::new()),
        Box::new(DesktopNotifier::new(timeout_ms)),
    )
}

#[cfg(any(feature = "gui", not(target_os = "linux")))]
fn main() {
    logging::init();
    giffire::ui::event_loop::run(build_dispatcher());
}

#[cfg(all(not(feature = "gui"), target_os = "linux"))]
fn main() {
    use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
    use giffire::services::global_hotkeys::GlobalHotkeyRegistrar;
    use log::error;

    logging::init();
    let mut dispatcher = build_dispatcher();

    let mut registrar = match GlobalHotkeyRegistrar::new() {
        Ok(r) => r,
        Err(e) => {
            error!("Global hotkeys unavailable: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = dispatcher.register(&mut registrar) {
        error!("No favorite hotkeys could be registered: {}", e);
        std::process::exit(1);
    }

    info!("Listening for favorite hotkeys");
    let events = GlobalHotKeyEvent::receiver();
    while let Ok(event) = events.recv() {
        if event.state == HotKeyState::Pressed {
            dispatcher.handle_event(event.id);
        }
    }

    dispatcher.unregister(&mut registrar);
}
