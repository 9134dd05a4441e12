//! Debug log setup
//!
//! Modules log through the `log` macros directly. Nothing is written unless
//! `--debug` installs the file logger below, since stderr belongs to the TUI.

use crate::constants::DEBUG_LOG_FILE;
use crate::VgrepError;
use log::{info, LevelFilter};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Truncate `<temp_dir>/vgrep-debug.log` and route all records there.
/// Returns the log path.
pub fn init_debug_logging() -> crate::Result<PathBuf> {
    let log_path = std::env::temp_dir().join(DEBUG_LOG_FILE);

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .map_err(|e| {
            VgrepError::IoError(io::Error::new(
                e.kind(),
                format!("Failed to create log file {}: {}", log_path.display(), e),
            ))
        })?;

    INIT.call_once(move || {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .filter_module("crossterm", LevelFilter::Warn)
            .filter_module("ratatui", LevelFilter::Warn)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}:{} {}",
                    chrono::Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.module_path().unwrap_or("vgrep"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init();
    });

    info!("Debug log at {}", log_path.display());
    Ok(log_path)
}
