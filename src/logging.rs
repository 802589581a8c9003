//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a file rather than
//! stderr. A log file that cannot be opened leaves logging off; it never
//! stops the program.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{ExpenseError, ExpenseResult};

/// Install the global subscriber, appending to `log_file`
///
/// `level` is an [`EnvFilter`] directive such as `"debug"` or
/// `"expense_tracker=trace"`; an unparsable directive falls back to `"info"`.
pub fn init_logging(log_file: &Path, level: &str) -> ExpenseResult<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("Failed to initialize logging: {}", e)))
}
