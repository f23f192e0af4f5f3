//! Core state container for the terminal application.

use rolodex_core::cache::{CacheView, QueryCache};
use rolodex_core::gateway::ApiGateway;
use rolodex_core::model::{Character, CharacterPage, QueryKey};
use rolodex_core::prefs::Preferences;
use throbber_widgets_tui::ThrobberState;

use super::{DetailState, FetchRuntime};
use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::state::{ResultsState, SelectionStore};
use crate::style::StyleConfig;

/// What the user walked away with when the session ended.
#[derive(Debug, Clone)]
pub struct BrowseOutcome {
	/// True when the user exported the selection rather than just quitting.
	pub accepted: bool,
	/// The active search term at exit.
	pub query: String,
	/// Selected records in toggle order.
	pub selected: Vec<Character>,
}

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
	Browse,
	About,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Text input widget for the search term.
	pub search_input: SearchInput<'a>,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) ui: UiLabels,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) fetch: FetchRuntime,
	pub(crate) cache: QueryCache,
	pub(crate) prefs: Preferences,
	/// The submitted (not draft) search term.
	pub(crate) active_term: String,
	pub(crate) current_page: u64,
	/// Last page shown for any key, kept so a key change never flashes to
	/// an empty screen.
	pub(crate) placeholder: Option<CharacterPage>,
	pub(crate) selection: SelectionStore,
	pub(crate) results: ResultsState,
	pub(crate) detail: Option<DetailState>,
	pub(crate) screen: Screen,
	pub(crate) render_fault: Option<String>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] backed by a fetch worker for `gateway`.
	///
	/// The last submitted search term and the theme preference are read
	/// from `prefs`; the initial fetch is issued by [`Self::hydrate`].
	#[must_use]
	pub fn new(gateway: ApiGateway, prefs: Preferences) -> Self {
		Self::with_runtime(FetchRuntime::spawn(gateway), prefs)
	}

	pub(crate) fn with_runtime(fetch: FetchRuntime, prefs: Preferences) -> Self {
		let active_term = prefs.load_search_term();
		let style = prefs
			.load_theme()
			.and_then(|name| StyleConfig::from_name(&name))
			.unwrap_or_default();

		Self {
			search_input: SearchInput::new(active_term.clone()),
			style,
			ui: UiLabels::default(),
			throbber_state: ThrobberState::default(),
			fetch,
			cache: QueryCache::new(),
			prefs,
			active_term,
			current_page: 1,
			placeholder: None,
			selection: SelectionStore::default(),
			results: ResultsState::default(),
			detail: None,
			screen: Screen::Browse,
			render_fault: None,
		}
	}

	/// Override the theme for this run without persisting it.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(style) = StyleConfig::from_name(name) {
			self.style = style;
		}
		self
	}

	/// Override the stored search term for this run.
	#[must_use]
	pub fn with_initial_term(mut self, term: &str) -> Self {
		let term = term.trim().to_string();
		self.search_input.set_text(&term);
		self.active_term = term;
		self
	}

	/// Start on `page` instead of page 1.
	#[must_use]
	pub fn with_start_page(mut self, page: u64) -> Self {
		self.current_page = page.max(1);
		self
	}

	/// Issue the initial fetch for the active term.
	pub fn hydrate(&mut self) {
		self.request_current();
	}

	/// The key currently addressed by the UI.
	pub(crate) fn current_key(&self) -> QueryKey {
		QueryKey::new(self.current_page, &self.active_term)
	}

	/// The page the browse screen should show right now.
	///
	/// Prefers resolved data for the current key, then the entry's own
	/// stale data, then the last page shown for any key. `None` means
	/// there is genuinely nothing to show (first load or an error view).
	pub(crate) fn visible_page(&self) -> Option<&CharacterPage> {
		match self.cache.lookup(&self.current_key()) {
			CacheView::Ready(page) => Some(page),
			CacheView::Loading {
				placeholder: Some(page),
			} => Some(page),
			CacheView::Loading { placeholder: None } | CacheView::Empty => {
				self.placeholder.as_ref()
			}
			CacheView::Failed(_) => None,
		}
	}

	/// Whether a request for the current key is in flight.
	pub(crate) fn is_loading(&self) -> bool {
		matches!(
			self.cache.lookup(&self.current_key()),
			CacheView::Loading { .. }
		)
	}

	/// Total pages for the pagination strip, from the best data available.
	pub(crate) fn total_pages(&self) -> u64 {
		self.visible_page().map_or(1, |page| page.total_pages)
	}

	pub(crate) fn outcome(&self, accepted: bool) -> BrowseOutcome {
		BrowseOutcome {
			accepted,
			query: self.active_term.clone(),
			selected: self.selection.records(),
		}
	}

	/// Record a rendering panic so the next frame shows the fallback
	/// screen.
	pub fn note_render_fault(&mut self, message: String) {
		self.render_fault = Some(message);
	}

	/// Reset the render-fault boundary: drop the fault and the transient
	/// view state that may have caused it.
	pub(crate) fn reset_render_fault(&mut self) {
		self.render_fault = None;
		self.detail = None;
		self.screen = Screen::Browse;
		self.results.reset();
	}
}
