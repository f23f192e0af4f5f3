//! Keyboard handling for the browse, detail, and about screens.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use super::state::{App, BrowseOutcome, Screen};

impl App<'_> {
	/// Process a keyboard event; returns an outcome when the session ends.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		if self.render_fault.is_some() {
			return self.handle_fault_key(key);
		}
		if self.screen == Screen::About {
			// Any key leaves the about screen.
			self.screen = Screen::Browse;
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => {
				if self.detail.is_some() {
					self.detail = None;
					return None;
				}
				return Some(self.outcome(false));
			}
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Enter => self.submit_search(),
			KeyCode::Char('e') if ctrl => return Some(self.outcome(true)),
			KeyCode::Tab => self.toggle_selected(),
			KeyCode::Char('l') if ctrl => self.selection.clear(),
			KeyCode::Char('r') if ctrl => self.retry_current(),
			KeyCode::Char('t') if ctrl => self.toggle_theme(),
			KeyCode::Char('a') if ctrl => self.screen = Screen::About,
			KeyCode::Char('d') if ctrl => self.open_detail_for_cursor(),
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => {
				let len = self.visible_len();
				self.results.move_down(len);
			}
			KeyCode::PageUp => self.previous_page(),
			KeyCode::PageDown => self.next_page(),
			KeyCode::Left if ctrl => self.previous_page(),
			KeyCode::Right if ctrl => self.next_page(),
			_ => {
				// Everything else edits the draft term; keystrokes do not
				// fetch or persist anything.
				self.search_input.input(key);
			}
		}
		None
	}

	fn handle_fault_key(&mut self, key: KeyEvent) -> Option<BrowseOutcome> {
		match key.code {
			KeyCode::Enter | KeyCode::Char('r') => {
				self.reset_render_fault();
				None
			}
			KeyCode::Esc => Some(self.outcome(false)),
			_ => None,
		}
	}

	/// Trim the draft term, persist it, and fetch page 1 for the new key.
	pub(crate) fn submit_search(&mut self) {
		let term = self.search_input.text().trim().to_string();
		if let Err(err) = self.prefs.store_search_term(&term) {
			warn!(error = %err, "failed to persist search term");
		}
		self.active_term = term;
		self.current_page = 1;
		self.results.reset();
		self.request_current();
	}

	pub(crate) fn next_page(&mut self) {
		if self.current_page < self.total_pages() {
			self.current_page += 1;
			self.results.reset();
			self.request_current();
		}
	}

	pub(crate) fn previous_page(&mut self) {
		if self.current_page > 1 {
			self.current_page -= 1;
			self.results.reset();
			self.request_current();
		}
	}

	/// Toggle the record under the cursor in or out of the selection.
	pub(crate) fn toggle_selected(&mut self) {
		let record = self
			.visible_page()
			.and_then(|page| page.items.get(self.results.cursor()))
			.cloned();
		if let Some(record) = record {
			self.selection.toggle(record);
		}
	}

	fn open_detail_for_cursor(&mut self) {
		let id = self
			.visible_page()
			.and_then(|page| page.items.get(self.results.cursor()))
			.map(|record| record.id);
		if let Some(id) = id {
			self.open_detail(id);
		}
	}

	fn toggle_theme(&mut self) {
		self.style.toggle();
		if let Err(err) = self.prefs.store_theme(&self.style.name) {
			warn!(error = %err, "failed to persist theme");
		}
	}

	fn visible_len(&self) -> usize {
		self.visible_page().map_or(0, |page| page.items.len())
	}
}
