//! OS-level registration of the favorite hotkeys via `global-hotkey`.
//!
//! Every favorite slot is bound to the same fixed modifier (`Alt+Shift`) plus
//! its digit. The combinations never change while the process runs; which
//! favorite a combination copies is decided at press time by the dispatcher.

use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::GlobalHotKeyManager;
use log::info;

use crate::types::errors::HotkeyError;
use crate::types::hotkey::HotkeySlot;

/// Human-readable modifier prefix shared by all favorite combinations.
pub const FAVORITE_MODIFIER_LABEL: &str = "Alt+Shift";

/// Whether pressed events are pumped by the `tao` event loop in `ui`.
/// macOS and Windows deliver hotkeys only to a running event loop; on Linux
/// the X11 backend has its own thread and the loop is opt-in via `gui`.
pub const USES_EVENT_LOOP: bool = cfg!(any(feature = "gui", not(target_os = "linux")));

/// Binds and releases the OS combination of a favorite slot.
pub trait HotkeyRegistrar {
    /// Binds `slot`'s combination and returns the id pressed events will carry.
    fn register_slot(&mut self, slot: HotkeySlot) -> Result<u32, HotkeyError>;
    fn unregister_slot(&mut self, slot: HotkeySlot) -> Result<(), HotkeyError>;
}

/// Label of the combination bound to `slot`, e.g. `Alt+Shift+3`.
pub fn combination_label(slot: HotkeySlot) -> String {
    format!("{}+{}", FAVORITE_MODIFIER_LABEL, slot)
}

/// The `global-hotkey` definition of `slot`'s combination.
pub fn favorite_hotkey(slot: HotkeySlot) -> HotKey {
    HotKey::new(Some(Modifiers::ALT | Modifiers::SHIFT), digit_code(slot))
}

fn digit_code(slot: HotkeySlot) -> Code {
    match slot.digit() {
        1 => Code::Digit1,
        2 => Code::Digit2,
        3 => Code::Digit3,
        4 => Code::Digit4,
        5 => Code::Digit5,
        6 => Code::Digit6,
        7 => Code::Digit7,
        8 => Code::Digit8,
        _ => Code::Digit9,
    }
}

/// Registrar backed by the OS through `GlobalHotKeyManager`.
///
/// On macOS and Windows the manager must be created on the thread that runs
/// the event loop.
pub struct GlobalHotkeyRegistrar {
    manager: GlobalHotKeyManager,
}

impl GlobalHotkeyRegistrar {
    pub fn new() -> Result<Self, HotkeyError> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| HotkeyError::RegistrationFailed(e.to_string()))?;
        Ok(Self { manager })
    }
}

impl HotkeyRegistrar for GlobalHotkeyRegistrar {
    fn register_slot(&mut self, slot: HotkeySlot) -> Result<u32, HotkeyError> {
        let hotkey = favorite_hotkey(slot);
        let id = hotkey.id();
        self.manager.register(hotkey).map_err(|e| {
            HotkeyError::RegistrationFailed(format!("{}: {}", combination_label(slot), e))
        })?;
        info!("Registered global hotkey {}", combination_label(slot));
        Ok(id)
    }

    fn unregister_slot(&mut self, slot: HotkeySlot) -> Result<(), HotkeyError> {
        self.manager.unregister(favorite_hotkey(slot)).map_err(|e| {
            HotkeyError::RegistrationFailed(format!("{}: {}", combination_label(slot), e))
        })
    }
}
