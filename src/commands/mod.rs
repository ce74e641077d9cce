//! Command implementations

mod admin;
mod config_cmd;
mod playlist;

pub use admin::{clear_logs, disconnect, reload_config, restart_workers, set_log_level};
pub use config_cmd::config_cmd;
pub use playlist::playlist_cmd;

use statusctl::{AdminClient, ClientConfig};

/// Connection settings given on the command line or via the environment
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub status_prefix: Option<String>,
}

impl Overrides {
    /// Effective config: stored config with overrides applied
    pub fn config(&self) -> ClientConfig {
        ClientConfig::load().with_overrides(self.base_url.clone(), self.status_prefix.clone())
    }

    /// Client for the effective config
    pub fn client(&self) -> anyhow::Result<AdminClient> {
        let urls = self.config().url_builder()?;
        Ok(AdminClient::new(urls))
    }
}
