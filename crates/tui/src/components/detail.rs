//! Side pane showing a single character fetched from the detail endpoint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use rolodex_core::Character;

use crate::style::Theme;

/// What the detail pane currently shows.
#[derive(Debug)]
pub enum DetailContent {
	Loading,
	Ready(Character),
	/// Fetch failed; the message is already user-facing. Dismiss with esc.
	Failed(String),
}

/// Render the detail pane into `area`.
pub fn render_detail(
	frame: &mut Frame,
	area: Rect,
	title: &str,
	content: &DetailContent,
	theme: &Theme,
) {
	let block = Block::bordered().title(title.to_string());

	let lines: Vec<Line> = match content {
		DetailContent::Loading => vec![Line::from(Span::styled("Loading…", theme.empty))],
		DetailContent::Ready(record) => vec![
			Line::from(Span::styled(record.name.clone(), theme.highlight)),
			Line::default(),
			Line::from(vec![
				Span::styled("Status:  ", theme.prompt),
				Span::raw(record.status.clone()),
			]),
			Line::from(vec![
				Span::styled("Species: ", theme.prompt),
				Span::raw(record.species.clone()),
			]),
			Line::from(vec![
				Span::styled("Image:   ", theme.prompt),
				Span::styled(record.image.clone(), theme.empty),
			]),
			Line::default(),
			Line::from(Span::styled("esc close", theme.empty)),
		],
		DetailContent::Failed(message) => vec![
			Line::from(Span::styled(message.clone(), theme.error)),
			Line::default(),
			Line::from(Span::styled("esc dismiss", theme.empty)),
		],
	};

	let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
	frame.render_widget(paragraph, area);
}
