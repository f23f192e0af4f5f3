//! Search input row with placeholder text and a fetch spinner.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthChar;

use crate::input::SearchInput;
use crate::style::Theme;

const PROMPT_LABEL: &str = "Search: ";

/// Argument bundle for rendering the input row.
pub struct PromptContext<'a> {
	/// The search input widget.
	pub input: &'a SearchInput<'a>,
	/// Placeholder text shown when the input is empty.
	pub placeholder: &'a str,
	/// Whether a fetch is currently in flight.
	pub loading: bool,
	/// Spinner animation state.
	pub throbber_state: &'a ThrobberState,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the input row.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: &PromptContext<'_>) {
	let chunks = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(PROMPT_LABEL.len() as u16),
			Constraint::Min(8),
			Constraint::Length(2),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(Span::styled(PROMPT_LABEL, ctx.theme.prompt)),
		chunks[0],
	);

	ctx.input.render(frame, chunks[1]);
	if ctx.input.text().is_empty() {
		render_placeholder(frame, chunks[1], ctx.placeholder, ctx.theme);
	}

	if ctx.loading {
		let spinner = Throbber::default().style(ctx.theme.prompt);
		let span = spinner.to_symbol_span(ctx.throbber_state);
		frame.render_widget(Paragraph::new(Line::from(span)), chunks[2]);
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let mut available_width = area.width as usize;
	let display_text: String = text
		.chars()
		.take_while(|ch| {
			let width = ch.width().unwrap_or(0);
			if width > available_width {
				return false;
			}
			available_width -= width;
			true
		})
		.collect();
	let buffer = frame.buffer_mut();
	buffer.set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty)),
		area.width,
	);
}
