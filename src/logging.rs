//! File-backed logging for the rating TUI.
//!
//! The terminal belongs to the TUI while it runs, so log output goes to a
//! file chosen in configuration. Without one, no subscriber is installed and
//! `tracing` events are discarded.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::AppError;

/// Installs a global `tracing` subscriber appending to `path`.
///
/// # Errors
///
/// Returns [`AppError::Io`] when the file cannot be opened, or
/// [`AppError::Logging`] when a global subscriber is already installed.
pub fn init_file_logging(path: &Path, level: Level) -> Result<(), AppError> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|error| AppError::Logging {
            message: error.to_string(),
        })
}

fn open_log_file(path: &Path) -> Result<File, AppError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| AppError::Io {
            message: format!("cannot open log file {}: {error}", path.display()),
        })
}
