//! Logging setup
//!
//! The terminal UI owns stdout, so log lines go to a file under
//! `~/.wealthwise/logs/` through a non-blocking writer.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "wealthwise.log";

/// Install the global subscriber writing to `log_dir/wealthwise.log`
///
/// `RUST_LOG` takes precedence over `default_level`. The returned guard
/// flushes buffered lines when dropped and must be kept alive until exit.
pub fn init(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    let (writer, guard) = file_writer(log_dir)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

/// Non-blocking writer appending to `log_dir/wealthwise.log`
///
/// Lines are buffered until the guard is dropped.
fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(file_appender))
}
