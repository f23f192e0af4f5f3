//! Frame composition for the application screens.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use rolodex_core::cache::CacheView;
use rolodex_core::error::FetchError;

use super::state::{App, Screen};
use crate::components::prompt::PromptContext;
use crate::components::status::SummaryContext;
use crate::components::table::TableContext;
use crate::components::{about, detail, pagination, prompt, status, table};
use crate::style::Theme;

impl App<'_> {
	/// Draw the whole frame for the current state.
	pub fn draw(&self, frame: &mut Frame) {
		let area = frame.area();
		let theme = &self.style.theme;

		if let Some(message) = &self.render_fault {
			render_fault_screen(frame, area, message, theme);
			return;
		}
		if self.screen == Screen::About {
			about::render_about(frame, area, theme);
			return;
		}

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(5),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.split(area);

		prompt::render_prompt(
			frame,
			rows[0],
			&PromptContext {
				input: &self.search_input,
				placeholder: &self.ui.input_placeholder,
				loading: self.is_loading(),
				throbber_state: &self.throbber_state,
				theme,
			},
		);

		let page = self.visible_page();
		status::render_summary(
			frame,
			rows[1],
			&SummaryContext {
				total_count: page.map_or(0, |p| p.total_count),
				current_page: self.current_page,
				total_pages: self.total_pages(),
				selected: self.selection.len(),
				count_label: &self.ui.count_label,
				refreshing: self.is_loading() && page.is_some(),
				theme,
			},
		);

		self.draw_main(frame, rows[2]);
		pagination::render_strip(frame, rows[3], self.current_page, self.total_pages(), theme);
		status::render_footer(frame, rows[4], &self.ui.footer_hint, theme);
	}

	fn draw_main(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let (list_area, detail_area) = if self.detail.is_some() {
			let halves = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Min(40), Constraint::Length(42)])
				.split(area);
			(halves[0], Some(halves[1]))
		} else {
			(area, None)
		};

		if let Some(message) = self.current_error() {
			status::render_error(frame, list_area, &message, theme);
		} else if let Some(page) = self.visible_page() {
			if page.is_empty() {
				status::render_empty(frame, list_area, theme);
			} else {
				table::render_table(
					frame,
					list_area,
					&TableContext {
						items: &page.items,
						selection: &self.selection,
						cursor: self.results.cursor(),
						title: &self.ui.table_title,
						theme,
						stale: self.is_loading(),
					},
				);
			}
		} else {
			status::render_loading(frame, list_area, theme);
		}

		if let (Some(detail_area), Some(state)) = (detail_area, &self.detail) {
			detail::render_detail(
				frame,
				detail_area,
				&self.ui.detail_title,
				&state.content,
				theme,
			);
		}
	}

	/// User-facing message for the current key's failure, if any.
	fn current_error(&self) -> Option<String> {
		match self.cache.lookup(&self.current_key()) {
			CacheView::Failed(err) => Some(list_error_message(err)),
			_ => None,
		}
	}
}

fn list_error_message(err: &FetchError) -> String {
	match err {
		FetchError::RequestFailed { status, reason } => {
			format!("The server answered {status} {reason}.")
		}
		FetchError::NetworkFailure(cause) => format!("Network error: {cause}."),
		FetchError::DetailNotFound { .. } => err.to_string(),
	}
}

/// Whole-app fallback shown after a rendering panic.
fn render_fault_screen(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let lines = vec![
		Line::default(),
		Line::from(Span::styled("Something broke while drawing the screen.", theme.error)),
		Line::default(),
		Line::from(Span::styled(message.to_string(), theme.empty)),
		Line::default(),
		Line::from(Span::styled("press enter to try again, esc to quit", theme.empty)),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.block(Block::bordered().title("rolodex"))
			.centered()
			.wrap(Wrap { trim: true }),
		area,
	);
}
