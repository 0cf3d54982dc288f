//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `ADZAN_LOG=debug`.
pub const LOG_ENV: &str = "ADZAN_LOG";

/// Install the stderr subscriber. `verbose` raises the default level to debug.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
