//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use statusctl::output::OutputMode;

/// statusctl - Admin client for the streaming proxy status API
#[derive(Parser, Debug)]
#[command(
    name = "statusctl",
    version,
    about = "Admin client for the streaming proxy status API",
    long_about = "Run administrative actions against a running status server.\n\n\
                  Disconnect clients, change the log level, clear logs, reload\n\
                  configuration, restart workers, and open or copy the playlist."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Base URL of the status server (overrides config)
    #[arg(long, global = true, env = "STATUSCTL_BASE_URL")]
    pub base_url: Option<String>,

    /// Path prefix of the status API (overrides config)
    #[arg(long, global = true, env = "STATUSCTL_STATUS_PREFIX")]
    pub status_prefix: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Disconnect a connected client
    Disconnect {
        /// Client ID to disconnect
        client_id: String,
    },

    /// Set the server log level
    LogLevel {
        /// New log level (validated by the server)
        level: String,
    },

    /// Clear the server logs
    ClearLogs,

    /// Reload the server configuration
    ReloadConfig,

    /// Restart the server workers
    RestartWorkers,

    /// Open or copy the playlist
    Playlist {
        #[command(subcommand)]
        action: PlaylistAction,
    },

    /// Manage client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum PlaylistAction {
    /// Open the playlist with the default handler
    Open,

    /// Copy the playlist URL to the clipboard
    Copy,

    /// Print the playlist URL
    Url,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Set a configuration value (`base_url`, `status_prefix`)
    Set {
        /// Key to set
        key: String,

        /// New value
        value: String,
    },

    /// Print the config file path
    Path,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let overrides = commands::Overrides {
        base_url: cli.base_url,
        status_prefix: cli.status_prefix,
    };

    match cli.command {
        Some(Command::Disconnect { client_id }) => {
            commands::disconnect(&client_id, &overrides, output_mode).await
        },
        Some(Command::LogLevel { level }) => {
            commands::set_log_level(&level, &overrides, output_mode).await
        },
        Some(Command::ClearLogs) => commands::clear_logs(&overrides, output_mode).await,
        Some(Command::ReloadConfig) => commands::reload_config(&overrides, output_mode).await,
        Some(Command::RestartWorkers) => commands::restart_workers(&overrides, output_mode).await,
        Some(Command::Playlist { action }) => {
            commands::playlist_cmd(&action, &overrides, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(action, &overrides, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": statusctl::VERSION
                    })
                );
            } else {
                println!("statusctl v{}", statusctl::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": statusctl::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("statusctl v{}", statusctl::VERSION);
                println!("\nRun 'statusctl --help' for usage");
            }
            Ok(())
        },
    }
}
