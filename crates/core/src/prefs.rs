//! Durable user preferences.
//!
//! Two values survive restarts: the last submitted search term, stored as a
//! raw string, and the UI theme, stored inside a versioned JSON envelope so
//! the format can evolve. Writes go through a temp-file rename to avoid
//! leaving a torn file behind on crash.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::app_dirs;

const SEARCH_TERM_FILE: &str = "search_term";
const THEME_FILE: &str = "theme.json";
const THEME_ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct ThemeEnvelope {
	version: u32,
	theme: String,
}

/// Handle to the preference files in one directory.
#[derive(Debug, Clone)]
pub struct Preferences {
	dir: PathBuf,
}

impl Preferences {
	/// Open (and create if needed) the preference directory at `dir`.
	pub fn open(dir: PathBuf) -> Result<Self> {
		fs::create_dir_all(&dir)
			.with_context(|| format!("failed to create preference directory {}", dir.display()))?;
		Ok(Self { dir })
	}

	/// Open the platform-default preference directory.
	pub fn open_default() -> Result<Self> {
		Self::open(app_dirs::get_config_dir()?)
	}

	/// Last submitted search term, empty when none was ever stored.
	#[must_use]
	pub fn load_search_term(&self) -> String {
		fs::read_to_string(self.dir.join(SEARCH_TERM_FILE)).unwrap_or_default()
	}

	/// Persist `term` as the last submitted search term.
	///
	/// Callers pass the already-trimmed value; this function stores it
	/// verbatim so the round trip is exact.
	pub fn store_search_term(&self, term: &str) -> Result<()> {
		write_atomic(&self.dir.join(SEARCH_TERM_FILE), term.as_bytes())
			.context("failed to persist search term")
	}

	/// Stored theme name, if a readable envelope of the current version
	/// exists.
	#[must_use]
	pub fn load_theme(&self) -> Option<String> {
		let raw = fs::read_to_string(self.dir.join(THEME_FILE)).ok()?;
		match serde_json::from_str::<ThemeEnvelope>(&raw) {
			Ok(envelope) if envelope.version == THEME_ENVELOPE_VERSION => Some(envelope.theme),
			Ok(envelope) => {
				warn!(version = envelope.version, "ignoring theme envelope with unknown version");
				None
			}
			Err(err) => {
				warn!(error = %err, "ignoring unreadable theme envelope");
				None
			}
		}
	}

	/// Persist `theme` as the preferred UI theme.
	pub fn store_theme(&self, theme: &str) -> Result<()> {
		let envelope = ThemeEnvelope {
			version: THEME_ENVELOPE_VERSION,
			theme: theme.to_string(),
		};
		let body = serde_json::to_vec_pretty(&envelope).context("failed to encode theme")?;
		write_atomic(&self.dir.join(THEME_FILE), &body).context("failed to persist theme")
	}
}

/// Write `bytes` to `path` via a sibling temp file and rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
	let tmp = path.with_extension("tmp");
	fs::write(&tmp, bytes)
		.with_context(|| format!("failed to write {}", tmp.display()))?;
	fs::rename(&tmp, path)
		.with_context(|| format!("failed to replace {}", path.display()))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn prefs() -> (tempfile::TempDir, Preferences) {
		let dir = tempfile::tempdir().expect("tempdir");
		let prefs = Preferences::open(dir.path().to_path_buf()).expect("open prefs");
		(dir, prefs)
	}

	#[test]
	fn search_term_defaults_to_empty() {
		let (_dir, prefs) = prefs();
		assert_eq!(prefs.load_search_term(), "");
	}

	#[test]
	fn search_term_round_trips_verbatim() {
		let (_dir, prefs) = prefs();
		prefs.store_search_term("Rick").expect("store");
		assert_eq!(prefs.load_search_term(), "Rick");
	}

	#[test]
	fn theme_round_trips_through_the_envelope() {
		let (_dir, prefs) = prefs();
		prefs.store_theme("dark").expect("store");
		assert_eq!(prefs.load_theme().as_deref(), Some("dark"));
	}

	#[test]
	fn unknown_envelope_version_falls_back_to_none() {
		let (dir, prefs) = prefs();
		fs::write(
			dir.path().join(THEME_FILE),
			r#"{ "version": 99, "theme": "dark" }"#,
		)
		.expect("write");
		assert!(prefs.load_theme().is_none());
	}

	#[test]
	fn unreadable_envelope_falls_back_to_none() {
		let (dir, prefs) = prefs();
		fs::write(dir.path().join(THEME_FILE), "not json").expect("write");
		assert!(prefs.load_theme().is_none());
	}
}
