//! File logging.
//!
//! The game owns the terminal, so log lines can't go to stdout or stderr.
//! When a log file is configured, a non-blocking `tracing` subscriber writes
//! to it; otherwise nothing is installed and events are dropped.

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let appender = open_appender(path)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))?;

    Ok(Some(guard))
}

fn open_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(dir)
        .map_err(|e| anyhow!("opening log file {}: {}", path.display(), e))
}
