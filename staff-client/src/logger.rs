//! Logging setup
//!
//! Library code only emits `tracing` events; binaries call [`init_logger`]
//! once at startup to print them.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - default filter (e.g. "info", "staff_client=debug"); `RUST_LOG` overrides it
/// * `json_format` - JSON lines instead of the compact human format
///
/// # Examples
/// ```no_run
/// staff_client::logger::init_logger("info", false).ok();
/// ```
pub fn init_logger(level: &str, json_format: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_target(false))
            .try_init()
    }
}
