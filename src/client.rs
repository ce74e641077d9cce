//! Admin action client
//!
//! Each operation is a single independent request against the status API.
//! There is no retry, timeout or deduplication: concurrent calls simply run
//! side by side.

use reqwest::{Response, Url};
use serde::Deserialize;

use crate::adapters::{CommandClipboard, NativeClipboard, SystemLauncher};
use crate::error::RequestError;
use crate::playlist;
use crate::ports::{Clipboard, FallbackClipboard, Launcher};
use crate::url::UrlBuilder;

/// Disconnect endpoint
pub const DISCONNECT_PATH: &str = "/api/disconnect";
/// Log level endpoint
pub const LOG_LEVEL_PATH: &str = "/api/log-level";
/// Clear logs endpoint
pub const CLEAR_LOGS_PATH: &str = "/api/clear-logs";
/// Reload config endpoint
pub const RELOAD_CONFIG_PATH: &str = "/api/reload-config";
/// Restart workers endpoint
pub const RESTART_WORKERS_PATH: &str = "/api/restart-workers";

/// Error payload returned by the status API
///
/// `error` is usually a string, but any non-null value is used as the
/// message; strings verbatim, anything else in its JSON form.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.error? {
            serde_json::Value::Null => None,
            serde_json::Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}

/// Desktop capabilities used by the playlist actions
pub struct Desktop {
    /// Preferred clipboard
    pub clipboard: Box<dyn Clipboard>,
    /// Clipboard used when the preferred one is unavailable
    pub fallback: Box<dyn FallbackClipboard>,
    /// URL opener
    pub launcher: Box<dyn Launcher>,
}

impl Desktop {
    /// Capabilities of the machine we are running on
    #[must_use]
    pub fn system() -> Self {
        Self {
            clipboard: Box::new(NativeClipboard),
            fallback: Box::new(CommandClipboard::default()),
            launcher: Box::new(SystemLauncher),
        }
    }
}

impl std::fmt::Debug for Desktop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desktop").finish_non_exhaustive()
    }
}

/// Client for the status API's administrative endpoints
#[derive(Debug)]
pub struct AdminClient {
    http: reqwest::Client,
    urls: UrlBuilder,
    desktop: Desktop,
}

impl AdminClient {
    /// Create a client using the system clipboard and opener
    #[must_use]
    pub fn new(urls: UrlBuilder) -> Self {
        Self::with_desktop(urls, Desktop::system())
    }

    /// Create a client with explicit desktop capabilities
    #[must_use]
    pub fn with_desktop(urls: UrlBuilder, desktop: Desktop) -> Self {
        Self {
            http: reqwest::Client::new(),
            urls,
            desktop,
        }
    }

    /// Disconnect a connected client
    pub async fn disconnect(&self, client_id: &str) -> Result<(), RequestError> {
        let url = self.urls.api_url(DISCONNECT_PATH);
        log::debug!("POST {url}");
        let response = self.http.post(url).form(&[("client_id", client_id)]).send().await?;
        ensure_success(response).await
    }

    /// Change the server's log level
    ///
    /// Unlike the other operations the response body is never inspected, so a
    /// failure always carries the generic status message.
    pub async fn set_log_level(&self, level: &str) -> Result<(), RequestError> {
        let url = self.urls.api_url(LOG_LEVEL_PATH);
        log::debug!("PUT {url}");
        let response = self.http.put(url).form(&[("level", level)]).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            log::debug!("log level update failed with {status}");
            Err(RequestError::from_status(status.as_u16()))
        }
    }

    /// Clear the server's log buffer
    pub async fn clear_logs(&self) -> Result<(), RequestError> {
        self.post_empty(CLEAR_LOGS_PATH).await
    }

    /// Reload the server configuration
    pub async fn reload_config(&self) -> Result<(), RequestError> {
        self.post_empty(RELOAD_CONFIG_PATH).await
    }

    /// Restart the server's workers
    pub async fn restart_workers(&self) -> Result<(), RequestError> {
        self.post_empty(RESTART_WORKERS_PATH).await
    }

    /// Absolute playlist URL
    #[must_use]
    pub fn playlist_url(&self) -> Url {
        self.urls.playlist_url()
    }

    /// Open the playlist in a new browsing context
    pub fn open_playlist(&self) {
        playlist::open_url(self.playlist_url().as_str(), self.desktop.launcher.as_ref());
    }

    /// Copy the playlist URL to the clipboard, reporting whether it worked
    #[must_use]
    pub fn copy_playlist_url(&self) -> bool {
        playlist::copy_text(
            self.playlist_url().as_str(),
            self.desktop.clipboard.as_ref(),
            self.desktop.fallback.as_ref(),
        )
    }

    async fn post_empty(&self, path: &str) -> Result<(), RequestError> {
        let url = self.urls.api_url(path);
        log::debug!("POST {url}");
        let response = self.http.post(url).send().await?;
        ensure_success(response).await
    }
}

/// Resolve a response, preferring the server's `error` field as the message
async fn ensure_success(response: Response) -> Result<(), RequestError> {
    let status = response.status();
    // The body is read either way; a 2xx body is ignored even if malformed
    let body = response.json::<ErrorBody>().await.ok();
    if status.is_success() {
        return Ok(());
    }

    let code = status.as_u16();
    let err = body.and_then(ErrorBody::into_message).map_or_else(
        || RequestError::from_status(code),
        |message| RequestError::new(message, Some(code)),
    );
    log::debug!("request failed with {status}: {err}");
    Err(err)
}
