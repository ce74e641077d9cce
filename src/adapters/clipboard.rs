//! Clipboard adapters
//!
//! [`NativeClipboard`] talks to the system clipboard directly and is only
//! available when a display server or pasteboard can be reached.
//! [`CommandClipboard`] pipes text into whichever clipboard tool is
//! installed, and is the fallback when the native clipboard is unavailable.
//!
//! On X11 and Wayland the selection is served by the process that set it, so
//! an `arboard` handle dropped at exit takes the copied text with it. There
//! the native clipboard reports itself unavailable and copies go through the
//! tools, which fork a background owner that outlives us.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::ports::{Clipboard, FallbackClipboard};

/// System clipboard accessed through `arboard`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeClipboard;

impl NativeClipboard {
    /// Whether text written through `arboard` survives this process exiting
    #[must_use]
    pub const fn persists_after_exit() -> bool {
        cfg!(any(target_os = "macos", target_os = "windows"))
    }
}

impl Clipboard for NativeClipboard {
    fn is_available(&self) -> bool {
        if !Self::persists_after_exit() {
            log::debug!("native clipboard does not outlive the process here");
            return false;
        }
        match arboard::Clipboard::new() {
            Ok(_) => true,
            Err(e) => {
                log::debug!("native clipboard unavailable: {e}");
                false
            },
        }
    }

    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// An external program that copies its stdin to the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardTool {
    /// Executable name or path
    pub program: String,
    /// Arguments passed before stdin is written
    pub args: Vec<String>,
}

impl ClipboardTool {
    /// Create a tool description
    #[must_use]
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Fallback clipboard that shells out to a clipboard tool
///
/// Tools are tried in order; the first one that can be spawned decides the
/// result. Reports `false` when none of them is installed.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    tools: Vec<ClipboardTool>,
}

impl CommandClipboard {
    /// Use an explicit list of tools
    #[must_use]
    pub const fn with_tools(tools: Vec<ClipboardTool>) -> Self {
        Self { tools }
    }

    /// Tools tried on this platform
    #[must_use]
    pub fn tools(&self) -> &[ClipboardTool] {
        &self.tools
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::with_tools(platform_tools())
    }
}

#[cfg(target_os = "macos")]
fn platform_tools() -> Vec<ClipboardTool> {
    vec![ClipboardTool::new("pbcopy", &[])]
}

#[cfg(target_os = "windows")]
fn platform_tools() -> Vec<ClipboardTool> {
    vec![ClipboardTool::new("clip", &[])]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_tools() -> Vec<ClipboardTool> {
    vec![
        ClipboardTool::new("wl-copy", &[]),
        ClipboardTool::new("xclip", &["-selection", "clipboard"]),
        ClipboardTool::new("xsel", &["--clipboard", "--input"]),
    ]
}

impl FallbackClipboard for CommandClipboard {
    fn copy(&self, text: &str) -> anyhow::Result<bool> {
        for tool in &self.tools {
            let spawned = Command::new(&tool.program)
                .args(&tool.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::debug!("clipboard tool '{}' not found", tool.program);
                    continue;
                },
                Err(e) => return Err(e.into()),
            };

            // stdin must be closed before waiting or the tool never exits
            if let Some(mut stdin) = child.stdin.take()
                && let Err(e) = stdin.write_all(text.as_bytes())
            {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(e.into());
            }
            let status = child.wait()?;
            log::debug!("clipboard tool '{}' exited with {status}", tool.program);
            return Ok(status.success());
        }

        log::debug!("no clipboard tool available");
        Ok(false)
    }
}
