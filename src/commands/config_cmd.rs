//! Config command - inspect and edit the client configuration

use statusctl::ClientConfig;
use statusctl::output::{OperationResult, OutputMode};

use super::Overrides;
use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config_cmd(
    action: ConfigAction,
    overrides: &Overrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = overrides.config();
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("base_url = {}", config.base_url);
                println!("status_prefix = {}", config.status_prefix);
            }
        },
        ConfigAction::Set { key, value } => {
            // Refuse to overwrite a file we could not parse
            let mut config = ClientConfig::try_load()?;
            config.set(&key, &value)?;
            config.save()?;
            OperationResult::ok(format!("Set {key} = {value}")).render(output_mode);
        },
        ConfigAction::Path => {
            let path = ClientConfig::config_path();
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
