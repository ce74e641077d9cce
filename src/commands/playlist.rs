//! Playlist commands

use statusctl::output::{OutputMode, PlaylistResult};

use super::Overrides;
use crate::cli::PlaylistAction;

/// Handle playlist subcommands
pub fn playlist_cmd(
    action: &PlaylistAction,
    overrides: &Overrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let url = client.playlist_url().to_string();

    match action {
        PlaylistAction::Open => {
            client.open_playlist();
            PlaylistResult {
                success: true,
                message: format!("Opening {url}"),
                url,
            }
            .render(output_mode);
        },
        PlaylistAction::Copy => {
            let copied = client.copy_playlist_url();
            let message = if copied {
                "Copied playlist URL to clipboard".to_string()
            } else {
                "Failed to copy playlist URL".to_string()
            };
            PlaylistResult {
                success: copied,
                url,
                message,
            }
            .render(output_mode);
            if !copied {
                anyhow::bail!("clipboard copy failed");
            }
        },
        PlaylistAction::Url => {
            if output_mode == OutputMode::Json {
                PlaylistResult {
                    success: true,
                    message: String::new(),
                    url,
                }
                .render(output_mode);
            } else {
                println!("{url}");
            }
        },
    }

    Ok(())
}
