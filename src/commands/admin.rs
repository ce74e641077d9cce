//! Admin actions against the status API

use statusctl::RequestError;
use statusctl::output::{OperationResult, OutputMode};

use super::Overrides;

/// Disconnect a client
pub async fn disconnect(
    client_id: &str,
    overrides: &Overrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let result = client.disconnect(client_id).await;
    report(result, format!("Disconnected client {client_id}"), output_mode)
}

/// Set the server log level
pub async fn set_log_level(
    level: &str,
    overrides: &Overrides,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let result = client.set_log_level(level).await;
    report(result, format!("Log level set to {level}"), output_mode)
}

/// Clear the server logs
pub async fn clear_logs(overrides: &Overrides, output_mode: OutputMode) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let result = client.clear_logs().await;
    report(result, "Logs cleared".to_string(), output_mode)
}

/// Reload the server configuration
pub async fn reload_config(overrides: &Overrides, output_mode: OutputMode) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let result = client.reload_config().await;
    report(result, "Configuration reloaded".to_string(), output_mode)
}

/// Restart the server workers
pub async fn restart_workers(overrides: &Overrides, output_mode: OutputMode) -> anyhow::Result<()> {
    let client = overrides.client()?;
    let result = client.restart_workers().await;
    report(result, "Workers restarted".to_string(), output_mode)
}

fn report(
    result: Result<(), RequestError>,
    success_message: String,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            OperationResult::ok(success_message).render(output_mode);
            Ok(())
        },
        Err(e) => {
            if output_mode == OutputMode::Json {
                OperationResult::failed(e.message()).render(output_mode);
            }
            Err(e.into())
        },
    }
}
