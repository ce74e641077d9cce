//! Playlist convenience actions
//!
//! Neither action ever fails: opening is fire-and-forget and copying reports
//! a boolean outcome after logging whatever went wrong.

use crate::ports::{Clipboard, FallbackClipboard, Launcher};

/// Copy `text` using the preferred clipboard if it is available, otherwise
/// the fallback mechanism.
///
/// Returns `false` on any failure; errors are logged, never returned.
pub fn copy_text(text: &str, clipboard: &dyn Clipboard, fallback: &dyn FallbackClipboard) -> bool {
    let result = if clipboard.is_available() {
        clipboard.write_text(text).map(|()| true)
    } else {
        log::debug!("preferred clipboard unavailable, using fallback");
        fallback.copy(text)
    };

    match result {
        Ok(copied) => copied,
        Err(e) => {
            log::error!("Failed to copy playlist URL: {e:#}");
            false
        },
    }
}

/// Ask `launcher` to open `url`, discarding any failure
pub fn open_url(url: &str, launcher: &dyn Launcher) {
    if let Err(e) = launcher.open(url) {
        log::warn!("Failed to open {url}: {e:#}");
    }
}
