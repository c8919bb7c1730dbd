//! Diagnostics setup.
//!
//! Logs always go to stderr so stdout carries only the attack lines.

use anyhow::Result;

use crate::ClientConfig;

/// Installs the global `tracing` subscriber.
pub fn setup_logging(config: &ClientConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(config.log_ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e).context("failed to install tracing subscriber"))?;

    tracing::debug!(filter = %config.log_filter, "logging initialized");
    if let Some(rejected) = &config.rejected_log_filter {
        tracing::warn!(
            rejected = %rejected,
            fallback = %config.log_filter,
            "ignoring invalid SANDBOX_LOG filter"
        );
    }
    Ok(())
}
