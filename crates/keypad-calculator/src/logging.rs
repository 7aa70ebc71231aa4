//! Logging setup for the `keypad-calc` binary
//!
//! The library only emits `tracing` events; this installs the subscriber.
//! Levels come from the `KEYPAD_CALC_LOG` environment variable using
//! `EnvFilter` syntax, defaulting to `warn`:
//!
//! ```bash
//! KEYPAD_CALC_LOG=debug keypad-calc eval "3+4*2="
//! KEYPAD_CALC_LOG=keypad_calculator::core=trace keypad-calc tui --log-file calc.log
//! ```

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "KEYPAD_CALC_LOG";

/// Filter used when the environment variable is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from an optional directive string
#[must_use]
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber
///
/// Logs go to stderr, or to `log_file` when given (the TUI owns the
/// terminal). Only the first successful call takes effect.
pub fn init(log_file: Option<&Path>) -> std::io::Result<()> {
    let writer = match log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let env = std::env::var(LOG_ENV).ok();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(log_file.is_none())
        .with_writer(writer)
        .with_filter(build_filter(env.as_deref()));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("logging already initialised");
    }
    Ok(())
}
