//! GIFfire: a GIF launcher with nine global favorite hotkeys.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;

#[cfg(any(feature = "gui", not(target_os = "linux")))]
pub mod ui;
