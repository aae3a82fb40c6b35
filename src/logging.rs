//! Logging setup
//!
//! Installs a `tracing` subscriber for the embedding application. Library
//! code only emits through `tracing` macros and never prints directly.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// The level comes from `RUST_LOG`, defaulting to `info`. Calling this twice
/// returns an error from the second install.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
