//! Port traits for desktop capabilities
//!
//! The playlist operations depend only on these traits, never on a concrete
//! clipboard or opener. Implementations live in the `adapters` module.

mod clipboard;
mod launcher;

pub use clipboard::{Clipboard, FallbackClipboard};
pub use launcher::Launcher;

#[cfg(test)]
pub use clipboard::{MockClipboard, MockFallbackClipboard};
#[cfg(test)]
pub use launcher::MockLauncher;
