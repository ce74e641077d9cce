//! Clipboard ports
//!
//! Two capabilities with different contracts: a preferred clipboard that may
//! or may not be usable in the current environment, and a fallback that
//! reports its own success as a boolean.

/// Preferred clipboard capability
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Probe whether the clipboard can be written in this environment
    fn is_available(&self) -> bool;

    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Fallback copy mechanism used when the preferred clipboard is unavailable
#[cfg_attr(test, mockall::automock)]
pub trait FallbackClipboard: Send + Sync {
    /// Copy `text`, returning whether the mechanism reported success
    fn copy(&self, text: &str) -> anyhow::Result<bool>;
}
