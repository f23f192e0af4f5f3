use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for header elements.
	pub header: Style,
	/// Style for the highlighted table row.
	pub row_highlight: Style,
	/// Style for prompt elements.
	pub prompt: Style,
	/// Style for empty states and placeholder text.
	pub empty: Style,
	/// Style for emphasized elements such as selection markers.
	pub highlight: Style,
	/// Style for error messages.
	pub error: Style,
}

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new()
		.fg(Color::Rgb(153, 27, 27))
		.add_modifier(Modifier::BOLD),
};

pub const DARK: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::Rgb(56, 189, 248)),
	empty: Style::new().fg(Color::Rgb(148, 163, 184)),
	highlight: Style::new()
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	error: Style::new()
		.fg(Color::Rgb(248, 113, 113))
		.add_modifier(Modifier::BOLD),
};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// The theme used when no preference is stored.
#[must_use]
pub fn default_theme() -> Theme {
	LIGHT
}

/// Names of the built-in themes.
#[must_use]
pub fn theme_names() -> &'static [&'static str] {
	&["light", "dark"]
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	match name {
		"light" => Some(LIGHT),
		"dark" => Some(DARK),
		_ => None,
	}
}
