//! Client configuration
//!
//! Stored at `~/.statusctl/config.toml`. Values given on the command line or
//! through the environment take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths;
use crate::url::UrlBuilder;

/// Default status server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the status server
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path prefix for status API endpoints (empty for none)
    #[serde(default)]
    pub status_prefix: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            status_prefix: String::new(),
        }
    }
}

impl ClientConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults if it is missing or
    /// unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config at {}: {e}", path.display());
            Self::default()
        })
    }

    /// Load config from the default location, failing on an unreadable file
    pub fn try_load() -> anyhow::Result<Self> {
        Self::try_load_from(&Self::config_path())
    }

    /// Load config from `path`; a missing file gives defaults, an unreadable
    /// or unparsable one is an error
    pub fn try_load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config at {}: {e}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Update a single key
    ///
    /// # Errors
    ///
    /// Fails on an unknown key or a base URL that cannot be used.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "base_url" => {
                UrlBuilder::new(value, &self.status_prefix)?;
                self.base_url = value.trim().to_string();
            },
            "status_prefix" => value.clone_into(&mut self.status_prefix),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply command-line / environment overrides
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, status_prefix: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(status_prefix) = status_prefix {
            self.status_prefix = status_prefix;
        }
        self
    }

    /// Build the URL builder described by this config
    pub fn url_builder(&self) -> Result<UrlBuilder, ConfigError> {
        UrlBuilder::new(&self.base_url, &self.status_prefix)
    }
}
