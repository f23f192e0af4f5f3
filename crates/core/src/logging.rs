//! File-backed tracing setup.
//!
//! The terminal owns stdout and stderr while the UI runs, so log output goes
//! to a file in the cache directory instead. Verbosity follows `RUST_LOG`
//! with an `info` default.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "rolodex.log";

/// Install the global tracing subscriber, writing to a log file in `dir`.
pub fn initialize(dir: &Path) -> Result<()> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = fs::File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
