// GIFfire shared type definitions
// Each submodule defines types used across the application.

pub mod errors;
pub mod gif;
pub mod hotkey;
pub mod library;
pub mod settings;
pub mod toast;
