//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! Set `FOCUSFLOW_LOG` to any `tracing` filter directive to override the
//! default level, e.g. `FOCUSFLOW_LOG=focusflow::api=trace`.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a filter directive override.
pub const LOG_ENV: &str = "FOCUSFLOW_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "warn,focusflow=debug";

/// Pick the filter directive for this run.
fn directive(verbose: bool, env: Option<String>) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ if verbose => VERBOSE_DIRECTIVE.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let directive = directive(verbose, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%directive, "logging initialized");
    }
}
