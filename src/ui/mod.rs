//! GIFfire desktop event loop.
//!
//! Runs the `tao` event loop the hotkey backend needs on macOS and Windows
//! and forwards pressed favorite hotkeys to the dispatcher.

pub mod event_loop;
