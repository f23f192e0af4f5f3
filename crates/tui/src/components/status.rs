//! Summary line, footer hints, and the empty/error main-area views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::style::Theme;

/// Argument bundle for the one-line result summary.
pub struct SummaryContext<'a> {
	pub total_count: u64,
	pub current_page: u64,
	pub total_pages: u64,
	pub selected: usize,
	pub count_label: &'a str,
	/// True while the summary describes placeholder data for an in-flight
	/// key.
	pub refreshing: bool,
	pub theme: &'a Theme,
}

/// Render the result summary line.
pub fn render_summary(frame: &mut Frame, area: Rect, ctx: &SummaryContext<'_>) {
	let mut spans = vec![Span::styled(
		format!("{} {}", ctx.total_count, ctx.count_label),
		ctx.theme.header,
	)];
	if ctx.total_pages > 1 {
		spans.push(Span::raw(format!(
			"  ·  page {} of {}",
			ctx.current_page, ctx.total_pages
		)));
	}
	if ctx.selected > 0 {
		spans.push(Span::styled(
			format!("  ·  {} selected", ctx.selected),
			ctx.theme.highlight,
		));
	}
	if ctx.refreshing {
		spans.push(Span::styled("  ·  refreshing…", ctx.theme.empty));
	}
	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the "no matches" view. Zero results are an answer, not an error.
pub fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
	let lines = vec![
		Line::default(),
		Line::from(Span::styled("No characters match your search.", theme.empty)),
		Line::from(Span::styled("Try a different name.", theme.empty)),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.block(Block::bordered())
			.centered()
			.wrap(Wrap { trim: true }),
		area,
	);
}

/// Render the first-load view, before any data has ever arrived.
pub fn render_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
	let lines = vec![
		Line::default(),
		Line::from(Span::styled("Loading characters…", theme.empty)),
	];
	frame.render_widget(
		Paragraph::new(lines).block(Block::bordered()).centered(),
		area,
	);
}

/// Render a recoverable fetch error with its retry affordance.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let lines = vec![
		Line::default(),
		Line::from(Span::styled("Something went wrong", theme.error)),
		Line::from(Span::raw(message.to_string())),
		Line::default(),
		Line::from(Span::styled("press ^r to retry", theme.empty)),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.block(Block::bordered())
			.centered()
			.wrap(Wrap { trim: true }),
		area,
	);
}

/// Render the key-hint footer.
pub fn render_footer(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
	frame.render_widget(
		Paragraph::new(Span::styled(hint.to_string(), theme.empty)),
		area,
	);
}
