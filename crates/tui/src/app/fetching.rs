//! Coordination between the UI state, the query cache, and the fetch
//! worker.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use rolodex_core::cache::CacheView;
use rolodex_core::fetch::FetchResult;
use rolodex_core::model::QueryKey;
use tracing::debug;

use super::DetailState;
use super::state::App;

impl App<'_> {
	/// Ensure a request is in flight (or fresh data is on hand) for the
	/// current key.
	pub(crate) fn request_current(&mut self) {
		let key = self.current_key();
		if self.cache.needs_fetch(&key, Instant::now()) {
			debug!(page = key.page(), term = key.term(), "issuing page fetch");
			let id = self.fetch.issue_page(key.clone());
			self.cache.begin(key, id);
		} else if let CacheView::Ready(page) = self.cache.lookup(&key) {
			// Fresh cache hit: no network call, just adopt the data.
			let page = page.clone();
			self.results.clamp(page.items.len());
			self.placeholder = Some(page);
		}
	}

	/// Invalidate the current key and refetch it. Used by the manual retry
	/// action.
	pub(crate) fn retry_current(&mut self) {
		let key = self.current_key();
		self.cache.invalidate(&key);
		self.request_current();
	}

	/// Open the detail pane for `character_id` and start its fetch.
	pub(crate) fn open_detail(&mut self, character_id: u64) {
		let request_id = self.fetch.issue_detail(character_id);
		self.detail = Some(DetailState::open(character_id, request_id));
	}

	/// Drain any fetch results waiting on the receiver channel.
	pub(crate) fn pump_fetch_results(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(result) => self.handle_fetch_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_fetch_result(&mut self, result: FetchResult) {
		match result {
			FetchResult::Page { id, key, result } => {
				// The entry is populated even for a key the user has moved
				// away from; only the current key updates the display.
				self.cache.complete(key.clone(), id, result, Instant::now());
				if key == self.current_key() {
					self.sync_current(&key);
				}
			}
			FetchResult::Skipped { id, key } => {
				self.cache.skipped(&key, id);
			}
			FetchResult::Detail {
				id,
				character_id,
				result,
			} => {
				if let Some(detail) = &mut self.detail
					&& detail.accepts(id, character_id)
				{
					detail.apply(result);
				}
			}
		}
	}

	/// React to the current key's entry changing: adopt fresh data or spend
	/// an automatic retry on a fresh failure.
	fn sync_current(&mut self, key: &QueryKey) {
		let (ready, failed) = match self.cache.lookup(key) {
			CacheView::Ready(page) => (Some(page.clone()), false),
			CacheView::Failed(_) => (None, true),
			_ => (None, false),
		};

		if let Some(page) = ready {
			self.results.clamp(page.items.len());
			self.placeholder = Some(page);
		} else if failed && self.cache.try_auto_retry(key) {
			debug!(page = key.page(), term = key.term(), "auto-retrying failed fetch");
			let id = self.fetch.issue_page(key.clone());
			self.cache.begin(key.clone(), id);
		}
	}
}
