//! Tracing setup for the trivia CLI
//!
//! Usage:
//!   trivia serve                      # info-level logs
//!   trivia --debug serve              # debug logs with targets
//!   RUST_LOG=trivia_server=debug ...  # fine-grained control (wins over --debug)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the console subscriber. Fails if one is already installed.
pub fn init(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
