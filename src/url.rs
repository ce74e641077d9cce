//! URL construction for the status API and static resources

use reqwest::Url;

use crate::error::ConfigError;

/// Path of the generated playlist, relative to the base URL
pub const PLAYLIST_PATH: &str = "/playlist.m3u";

/// Builds absolute URLs against a configured base
///
/// Status API endpoints additionally get the status prefix prepended, static
/// resources such as the playlist do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: Url,
    status_prefix: String,
}

impl UrlBuilder {
    /// Create a builder from a base URL and a status path prefix
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http` or `https` URL.
    pub fn new(base_url: &str, status_prefix: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }

        Ok(Self {
            base,
            status_prefix: normalize_prefix(status_prefix),
        })
    }

    /// Normalized status prefix (empty, or `/segment` without trailing slash)
    #[must_use]
    pub fn status_prefix(&self) -> &str {
        &self.status_prefix
    }

    /// Prefix a status API path with the configured status prefix
    #[must_use]
    pub fn status_path(&self, path: &str) -> String {
        format!("{}{}", self.status_prefix, leading_slash(path))
    }

    /// Resolve `path` against the base URL, keeping any base path
    #[must_use]
    pub fn build_url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let joined = format!("{}{}", self.base.path().trim_end_matches('/'), leading_slash(path));
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Absolute URL of a status API endpoint
    #[must_use]
    pub fn api_url(&self, path: &str) -> Url {
        self.build_url(&self.status_path(path))
    }

    /// Absolute URL of the playlist
    #[must_use]
    pub fn playlist_url(&self) -> Url {
        self.build_url(PLAYLIST_PATH)
    }
}

fn leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
