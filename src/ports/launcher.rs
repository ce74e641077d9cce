//! URL launcher port

/// Opens a URL in a new browsing context
#[cfg_attr(test, mockall::automock)]
pub trait Launcher: Send + Sync {
    /// Ask the environment to open `url`
    fn open(&self, url: &str) -> anyhow::Result<()>;
}
