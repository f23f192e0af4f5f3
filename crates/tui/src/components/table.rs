//! Table of character records with selection markers and a cursor row.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Row, Table};
use rolodex_core::Character;

use crate::state::SelectionStore;
use crate::style::Theme;

/// Marker shown in front of selected records.
const SELECTED_MARKER: &str = "✔";

/// Argument bundle for rendering the record table.
pub struct TableContext<'a> {
	pub items: &'a [Character],
	pub selection: &'a SelectionStore,
	/// Index of the highlighted row.
	pub cursor: usize,
	pub title: &'a str,
	pub theme: &'a Theme,
	/// True while the rows belong to a superseded key and a refetch is in
	/// flight; the table dims to signal staleness.
	pub stale: bool,
}

/// Render the record table into `area`.
pub fn render_table(frame: &mut Frame, area: Rect, ctx: &TableContext<'_>) {
	let header = Row::new(vec!["", "Name", "Status", "Species"]).style(ctx.theme.header);

	let rows = ctx.items.iter().enumerate().map(|(index, record)| {
		let marker = if ctx.selection.is_selected(record.id) {
			Span::styled(SELECTED_MARKER, ctx.theme.highlight)
		} else {
			Span::raw(" ")
		};
		let row = Row::new(vec![
			ratatui::text::Line::from(marker),
			record.name.clone().into(),
			record.status.clone().into(),
			record.species.clone().into(),
		]);
		if index == ctx.cursor {
			row.style(ctx.theme.row_highlight)
		} else if ctx.stale {
			row.style(ctx.theme.empty)
		} else {
			row
		}
	});

	let widths = [
		Constraint::Length(2),
		Constraint::Min(24),
		Constraint::Length(12),
		Constraint::Length(16),
	];
	let table = Table::new(rows, widths)
		.header(header)
		.block(Block::bordered().title(ctx.title.to_string()));

	frame.render_widget(table, area);
}
