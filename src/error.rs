//! Error types for the admin client
//!
//! The five HTTP-backed operations fail with exactly one kind of error,
//! [`RequestError`]. Configuration problems are reported separately through
//! [`ConfigError`] and never come out of an operation call.

use thiserror::Error;

/// A failed admin request
///
/// `Display` renders only the message so it can be shown to a user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
    status: Option<u16>,
}

impl RequestError {
    /// Create an error with an explicit message
    #[must_use]
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Create the generic error used when the server gave no usable reason
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("Request failed with status {status}"), Some(status))
    }

    /// Human-readable failure message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string(), err.status().map(|s| s.as_u16()))
    }
}

/// Invalid client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL could not be used to build request URLs
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Config key not recognised by `config set`
    #[error("unknown config key '{0}' (expected base_url or status_prefix)")]
    UnknownKey(String),
}
