//! Diagnostic logging, silent unless `PASSGEN_LOG` is set.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PASSGEN_LOG";

/// Install the stderr subscriber. Stdout carries only the password.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
