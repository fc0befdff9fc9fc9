//! Logging setup for EmSearch
//!
//! The TUI owns the terminal, so log output goes to a file instead of
//! stderr. By default the file sits next to the executable, same place a
//! user would look for the binary itself.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{EmSearchError, Result};

/// Initialize the global tracing subscriber, writing to `log_file` or to
/// `emsearch.log` next to the executable. Honors `RUST_LOG` when set.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path(),
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emsearch=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| EmSearchError::LoggingSetup(e.to_string()))?;

    Ok(())
}

/// Log file path: same directory as the executable
fn default_log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emsearch.log")
}
