//! Adapter implementations for port traits
//!
//! - `clipboard` - native clipboard (`arboard`) and clipboard-tool fallback
//! - `launcher` - platform URL opener

pub mod clipboard;
pub mod launcher;

pub use clipboard::{ClipboardTool, CommandClipboard, NativeClipboard};
pub use launcher::SystemLauncher;
