//! Static about screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::style::Theme;

/// Render the about screen over the whole frame.
pub fn render_about(frame: &mut Frame, area: Rect, theme: &Theme) {
	let lines = vec![
		Line::default(),
		Line::from(Span::styled("rolodex", theme.highlight)),
		Line::default(),
		Line::from("Browse, search, and select character records from the"),
		Line::from("public character API, then export your selection."),
		Line::default(),
		Line::from(Span::styled(
			"Selections survive page changes and searches until cleared.",
			theme.empty,
		)),
		Line::default(),
		Line::from(Span::styled("press any key to go back", theme.empty)),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.block(Block::bordered().title("About"))
			.centered()
			.wrap(Wrap { trim: true }),
		area,
	);
}
