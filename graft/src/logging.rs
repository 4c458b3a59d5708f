//! Log output for the `graft` binary.

use eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "graft=debug,tablegraft_codegen=debug,tablegraft_schema=debug";

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialize logging: {}", e))
}
