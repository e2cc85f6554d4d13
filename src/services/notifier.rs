//! Desktop notifications shown after a hotkey activation.

use log::debug;
use notify_rust::{Notification, Timeout};

use crate::types::errors::NotifyError;

/// Title of every notification the launcher raises.
pub const NOTIFICATION_TITLE: &str = "🔥 GIFfire";

/// Something that can show a short title/body message to the user.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// OS notifications via `notify-rust`.
pub struct DesktopNotifier {
    timeout_ms: u32,
}

impl DesktopNotifier {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(3000)
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        Notification::new()
            .summary(title)
            .body(body)
            .timeout(Timeout::Milliseconds(self.timeout_ms))
            .show()
            .map_err(|e| NotifyError::ShowFailed(e.to_string()))?;
        debug!("Notification shown: {}", body);
        Ok(())
    }
}
