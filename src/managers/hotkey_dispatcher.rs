//! Hotkey Dispatcher for GIFfire.
//!
//! Binds the nine favorite combinations once at start-up and, on every press,
//! re-reads the data store to find which favorite currently holds the pressed
//! slot. The overlay may have rebound slots in another process since the last
//! press, so nothing is cached between activations. The dispatcher never
//! writes the store.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::services::clipboard::ClipboardSink;
use crate::services::data_store::DataStoreTrait;
use crate::services::global_hotkeys::{combination_label, HotkeyRegistrar};
use crate::services::notifier::{Notifier, NOTIFICATION_TITLE};
use crate::types::errors::HotkeyError;
use crate::types::hotkey::{Activation, HotkeySlot};
use crate::types::library::LauncherData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Unregistered,
    Registered,
}

/// Decides what pressing `slot` does given the current document.
pub fn resolve_activation(slot: HotkeySlot, data: &LauncherData) -> Activation {
    match data.favorite_for(slot) {
        Some(fav) => match fav.gif.reference_url() {
            Some(url) => Activation::Copy {
                slot,
                url: url.to_string(),
                title: fav.gif.title.clone(),
            },
            None => Activation::NotAssigned { slot },
        },
        None => Activation::NotAssigned { slot },
    }
}

pub struct HotkeyDispatcher {
    store: Arc<dyn DataStoreTrait>,
    clipboard: Box<dyn ClipboardSink>,
    notifier: Box<dyn Notifier>,
    bindings: HashMap<u32, HotkeySlot>,
    state: DispatcherState,
}

impl HotkeyDispatcher {
    pub fn new(
        store: Arc<dyn DataStoreTrait>,
        clipboard: Box<dyn ClipboardSink>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            clipboard,
            notifier,
            bindings: HashMap::new(),
            state: DispatcherState::Unregistered,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Slot bound to the OS hotkey `id`, if any.
    pub fn slot_for(&self, id: u32) -> Option<HotkeySlot> {
        self.bindings.get(&id).copied()
    }

    /// Binds all nine slots. A slot the OS refuses is skipped with a warning;
    /// it is an error only if none could be bound. Returns the number bound.
    pub fn register(&mut self, registrar: &mut dyn HotkeyRegistrar) -> Result<usize, HotkeyError> {
        if self.state == DispatcherState::Registered {
            return Err(HotkeyError::AlreadyRegistered);
        }

        let mut last_error = None;
        for slot in HotkeySlot::all() {
            match registrar.register_slot(slot) {
                Ok(id) => {
                    self.bindings.insert(id, slot);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", combination_label(slot), e);
                    last_error = Some(e);
                }
            }
        }

        if self.bindings.is_empty() {
            return Err(last_error.unwrap_or_else(|| {
                HotkeyError::RegistrationFailed("no favorite hotkeys bound".to_string())
            }));
        }

        self.state = DispatcherState::Registered;
        info!("Favorite hotkeys ready ({} of 9 bound)", self.bindings.len());
        Ok(self.bindings.len())
    }

    /// Releases every binding. Only meant for process teardown.
    pub fn unregister(&mut self, registrar: &mut dyn HotkeyRegistrar) {
        for slot in self.bindings.values() {
            if let Err(e) = registrar.unregister_slot(*slot) {
                warn!("Failed to release {}: {}", combination_label(*slot), e);
            }
        }
        self.bindings.clear();
        self.state = DispatcherState::Unregistered;
    }

    /// Handles a pressed OS hotkey. Ids this dispatcher did not bind are ignored.
    pub fn handle_event(&mut self, id: u32) -> Option<Activation> {
        let slot = self.slot_for(id)?;
        Some(self.activate(slot))
    }

    /// Resolves `slot` against a fresh read of the store and performs the
    /// clipboard and notification side effects. Both are best effort.
    pub fn activate(&mut self, slot: HotkeySlot) -> Activation {
        let data = self.store.read();
        let activation = resolve_activation(slot, &data);

        if let Activation::Copy { url, title, .. } = &activation {
            match self.clipboard.write_text(url) {
                Ok(()) => info!("Favorite {} ({}) copied to clipboard", slot, title),
                Err(e) => warn!("Favorite {} could not be copied: {}", slot, e),
            }
        } else {
            debug!("Favorite {} not assigned", slot);
        }

        if let Err(e) = self.notifier.notify(NOTIFICATION_TITLE, &activation.message()) {
            debug!("Notification skipped: {}", e);
        }

        activation
    }
}
