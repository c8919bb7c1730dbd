//! Character sandbox binary.
//!
//! Prints the demonstration's attack lines to stdout and exits.
//!
//! # Examples
//!
//! ```bash
//! cargo run -p sandbox-client
//!
//! # Trace every forwarded attack on stderr
//! SANDBOX_LOG=character_core=trace cargo run -p sandbox-client
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use sandbox_client::{ClientConfig, demo, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config)?;

    tracing::info!("Starting sandbox demo");

    let mut out = io::stdout().lock();
    demo::run(&mut out).context("demo failed")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!("Sandbox demo complete");
    Ok(())
}
