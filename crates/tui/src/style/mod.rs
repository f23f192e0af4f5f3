//! Visual styling utilities.
//!
//! Themes represent the color schemes applied to the terminal UI. Two are
//! built in, matching the light/dark preference the app persists between
//! runs.

mod theme;

pub use theme::{Theme, by_name, default_theme, theme_names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug)]
pub struct StyleConfig {
	/// Name of the active theme, used when persisting the preference.
	pub name: String,
	/// The active theme for the UI.
	pub theme: Theme,
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self {
			name: "light".to_string(),
			theme: default_theme(),
		}
	}
}

impl StyleConfig {
	/// Look up a named theme, `None` when the name is unknown.
	#[must_use]
	pub fn from_name(name: &str) -> Option<Self> {
		by_name(name).map(|theme| Self {
			name: name.to_string(),
			theme,
		})
	}

	/// Switch between the two built-in themes.
	pub fn toggle(&mut self) {
		let next = if self.name == "dark" { "light" } else { "dark" };
		if let Some(theme) = by_name(next) {
			self.name = next.to_string();
			self.theme = theme;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_theme_name_is_rejected() {
		assert!(StyleConfig::from_name("solarized").is_none());
	}

	#[test]
	fn toggle_flips_between_light_and_dark() {
		let mut style = StyleConfig::default();
		assert_eq!(style.name, "light");
		style.toggle();
		assert_eq!(style.name, "dark");
		style.toggle();
		assert_eq!(style.name, "light");
	}
}
