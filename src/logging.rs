//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

/// Initializes the tracing subscriber, appending to `path`.
///
/// Only this crate logs at info level by default; `RUST_LOG` overrides.
pub fn init(path: &Path) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("searchbar=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|error| anyhow!("failed to install log subscriber: {error}"))
}
