//! Single-slot toast notifications for the overlay.
//!
//! A new toast replaces the pending one instead of queueing behind it, and a
//! toast disappears on its own once its lifetime has passed.

use std::time::{Duration, Instant};

use crate::types::toast::{Toast, ToastKind};

pub struct ToastManager {
    lifetime: Duration,
    current: Option<(Toast, Instant)>,
}

impl ToastManager {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            current: None,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_at(message, kind, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        self.current = Some((
            Toast {
                message: message.into(),
                kind,
            },
            now,
        ));
    }

    /// The visible toast, if it has not expired yet.
    pub fn current(&mut self) -> Option<Toast> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&mut self, now: Instant) -> Option<Toast> {
        let expired = matches!(
            &self.current,
            Some((_, shown)) if now.saturating_duration_since(*shown) >= self.lifetime
        );
        if expired {
            self.current = None;
        }
        self.current.as_ref().map(|(toast, _)| toast.clone())
    }

    /// Changes how long toasts stay visible, including the pending one.
    pub fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime = lifetime;
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(Duration::from_millis(3000))
    }
}
