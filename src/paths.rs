//! Centralized path definitions for statusctl
//!
//! ```text
//! ~/.statusctl/
//! └── config.toml               # Base URL and status prefix
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".statusctl";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global statusctl directory.
///
/// Returns `~/.statusctl/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.statusctl/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
