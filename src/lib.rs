//! statusctl - administrative client for a streaming proxy status API
//!
//! This library wraps the status server's admin endpoints (disconnect a
//! client, change the log level, clear logs, reload config, restart
//! workers) and the playlist conveniences (open it, copy its URL).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod playlist;
pub mod ports;
pub mod url;

pub use client::{AdminClient, Desktop};
pub use config::ClientConfig;
pub use error::{ConfigError, RequestError};
pub use url::UrlBuilder;
