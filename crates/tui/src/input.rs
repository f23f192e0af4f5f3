//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// The search box at the top of the browse screen.
///
/// Holds the draft term only; submitting and persisting are the
/// application's job.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	/// Create an input pre-filled with `initial`.
	#[must_use]
	pub fn new(initial: String) -> Self {
		let mut textarea = TextArea::new(vec![initial]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current draft text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Replace the draft text wholesale.
	pub fn set_text(&mut self, text: &str) {
		self.textarea = TextArea::new(vec![text.to_string()]);
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea.move_cursor(tui_textarea::CursorMove::End);
	}

	/// Feed a key event into the textarea. Returns true when the text
	/// changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Render the textarea into `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_reflects_the_initial_value() {
		let input = SearchInput::new("rick".to_string());
		assert_eq!(input.text(), "rick");
	}

	#[test]
	fn set_text_replaces_the_draft() {
		let mut input = SearchInput::new("rick".to_string());
		input.set_text("morty");
		assert_eq!(input.text(), "morty");
	}
}
