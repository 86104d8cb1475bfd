//! Tracing subscriber setup

use anyhow::{anyhow, Result};
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "COPYCAT_LOG";

/// Default filter when neither `--verbose` nor `COPYCAT_LOG` is given
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the global subscriber. Log events go to stderr so prompts and
/// results on stdout stay clean.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
