//! Filesystem locations for configuration, preferences, and logs.
//!
//! Every directory can be overridden through an environment variable, which
//! the test suite and packaging scripts rely on; otherwise the platform
//! convention from the `directories` crate applies.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Configuration directory, holding `config.toml` and the preference files.
/// Override with `ROLODEX_CONFIG_DIR`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve("ROLODEX_CONFIG_DIR", |dirs| {
		dirs.config_local_dir().to_path_buf()
	})
}

/// Data directory for application assets. Override with `ROLODEX_DATA_DIR`.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve("ROLODEX_DATA_DIR", |dirs| dirs.data_local_dir().to_path_buf())
}

/// Cache directory, which also holds the log file. Override with
/// `ROLODEX_CACHE_DIR`.
pub fn get_cache_dir() -> Result<PathBuf> {
	resolve("ROLODEX_CACHE_DIR", |dirs| dirs.cache_dir().to_path_buf())
}

/// Prefer the environment override, then the platform default.
///
/// An empty override counts as unset so that shell defaults like
/// `ROLODEX_CONFIG_DIR=` behave the way users expect.
fn resolve(env_name: &str, pick: impl FnOnce(&ProjectDirs) -> PathBuf) -> Result<PathBuf> {
	if let Some(value) = env::var_os(env_name)
		&& !value.is_empty()
	{
		return Ok(PathBuf::from(value));
	}

	let dirs = ProjectDirs::from("io", "rolodex", "rolodex")
		.ok_or_else(|| anyhow!("unable to determine a home directory for rolodex"))?;
	Ok(pick(&dirs))
}
