//! Keyed cache over paged query results.
//!
//! Entries are addressed by [`QueryKey`] and hold the last resolved outcome
//! for that key plus the bookkeeping needed for stale-while-revalidate
//! display: while a refetch is in flight the previous page stays available
//! as a placeholder, and a response that lost a race against a newer request
//! may still populate its entry without disturbing the newer in-flight
//! marker.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::FetchError;
use crate::model::{CharacterPage, QueryKey};

/// How long a successful entry is served without a new network call.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// How many times a retryable failure is re-issued without user action.
pub const MAX_AUTO_RETRIES: u32 = 2;

#[derive(Debug, Default)]
struct CacheEntry {
	data: Option<CharacterPage>,
	error: Option<FetchError>,
	resolved_at: Option<Instant>,
	in_flight: Option<u64>,
	invalidated: bool,
	auto_retries: u32,
}

/// What a consumer sees when it asks for a key.
#[derive(Debug)]
pub enum CacheView<'a> {
	/// Nothing is known about this key.
	Empty,
	/// A request is in flight; `placeholder` is the entry's previous data,
	/// shown so the view never flashes to an empty state.
	Loading {
		placeholder: Option<&'a CharacterPage>,
	},
	/// The last fetch for this key succeeded.
	Ready(&'a CharacterPage),
	/// The last fetch for this key failed.
	Failed(&'a FetchError),
}

/// Cache of page results keyed by `(page, term)`.
pub struct QueryCache {
	entries: HashMap<QueryKey, CacheEntry>,
	freshness: Duration,
}

impl Default for QueryCache {
	fn default() -> Self {
		Self::new()
	}
}

impl QueryCache {
	#[must_use]
	pub fn new() -> Self {
		Self::with_freshness(FRESHNESS_WINDOW)
	}

	/// Build a cache with a custom freshness window.
	#[must_use]
	pub fn with_freshness(freshness: Duration) -> Self {
		Self {
			entries: HashMap::new(),
			freshness,
		}
	}

	/// Current state of `key` from a consumer's point of view.
	#[must_use]
	pub fn lookup(&self, key: &QueryKey) -> CacheView<'_> {
		let Some(entry) = self.entries.get(key) else {
			return CacheView::Empty;
		};
		if entry.in_flight.is_some() {
			return CacheView::Loading {
				placeholder: entry.data.as_ref(),
			};
		}
		if let Some(error) = &entry.error {
			return CacheView::Failed(error);
		}
		match &entry.data {
			Some(page) => CacheView::Ready(page),
			None => CacheView::Empty,
		}
	}

	/// Whether a new request should be issued for `key` at `now`.
	///
	/// False while a request is already in flight (de-duplication) and while
	/// a successful entry is still inside the freshness window. Invalidated
	/// and failed entries always warrant a fetch.
	#[must_use]
	pub fn needs_fetch(&self, key: &QueryKey, now: Instant) -> bool {
		let Some(entry) = self.entries.get(key) else {
			return true;
		};
		if entry.in_flight.is_some() {
			return false;
		}
		if entry.invalidated || entry.error.is_some() {
			return true;
		}
		match (entry.data.as_ref(), entry.resolved_at) {
			(Some(_), Some(resolved_at)) => now.duration_since(resolved_at) >= self.freshness,
			_ => true,
		}
	}

	/// Record that request `id` is now in flight for `key`.
	pub fn begin(&mut self, key: QueryKey, id: u64) {
		let entry = self.entries.entry(key).or_default();
		entry.in_flight = Some(id);
		entry.invalidated = false;
	}

	/// Record the outcome of request `id` for `key`.
	///
	/// The entry is populated regardless of whether the id is still current,
	/// but only the matching id clears the in-flight marker: a late response
	/// must not make a newer request look finished.
	pub fn complete(
		&mut self,
		key: QueryKey,
		id: u64,
		result: Result<CharacterPage, FetchError>,
		now: Instant,
	) {
		let entry = self.entries.entry(key).or_default();
		if entry.in_flight == Some(id) {
			entry.in_flight = None;
		}
		entry.resolved_at = Some(now);
		match result {
			Ok(page) => {
				entry.data = Some(page);
				entry.error = None;
				entry.auto_retries = 0;
			}
			Err(error) => {
				// Stale data stays around as the placeholder for the next
				// attempt.
				entry.error = Some(error);
			}
		}
	}

	/// Record that request `id` for `key` was dropped before reaching the
	/// network.
	pub fn skipped(&mut self, key: &QueryKey, id: u64) {
		if let Some(entry) = self.entries.get_mut(key)
			&& entry.in_flight == Some(id)
		{
			entry.in_flight = None;
		}
	}

	/// Force the next access for `key` to bypass freshness and refetch.
	pub fn invalidate(&mut self, key: &QueryKey) {
		debug!(page = key.page(), term = key.term(), "invalidating cache entry");
		let entry = self.entries.entry(key.clone()).or_default();
		entry.invalidated = true;
		entry.auto_retries = 0;
	}

	/// Whether a failed entry may be re-issued automatically, consuming one
	/// retry budget slot if so.
	pub fn try_auto_retry(&mut self, key: &QueryKey) -> bool {
		let Some(entry) = self.entries.get_mut(key) else {
			return false;
		};
		let retryable = entry
			.error
			.as_ref()
			.is_some_and(FetchError::retryable);
		if !retryable || entry.in_flight.is_some() || entry.auto_retries >= MAX_AUTO_RETRIES {
			return false;
		}
		entry.auto_retries += 1;
		true
	}

	/// Drop every entry. Test hook and escape hatch for a full refresh.
	pub fn reset(&mut self) {
		self.entries.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::Character;

	fn page_with(total_pages: u64) -> CharacterPage {
		CharacterPage {
			items: vec![Character {
				id: 1,
				name: "Rick Sanchez".to_string(),
				status: "Alive".to_string(),
				species: "Human".to_string(),
				image: String::new(),
			}],
			total_count: 1,
			total_pages,
		}
	}

	fn server_error() -> FetchError {
		FetchError::RequestFailed {
			status: 500,
			reason: "Internal Server Error".to_string(),
		}
	}

	#[test]
	fn unknown_key_is_empty_and_needs_a_fetch() {
		let cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		assert!(matches!(cache.lookup(&key), CacheView::Empty));
		assert!(cache.needs_fetch(&key, Instant::now()));
	}

	#[test]
	fn in_flight_requests_are_not_duplicated() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "rick");
		cache.begin(key.clone(), 1);
		assert!(!cache.needs_fetch(&key, Instant::now()));
		assert!(matches!(
			cache.lookup(&key),
			CacheView::Loading { placeholder: None }
		));
	}

	#[test]
	fn fresh_success_is_served_without_a_new_fetch() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Ok(page_with(42)), now);

		assert!(matches!(cache.lookup(&key), CacheView::Ready(_)));
		assert!(!cache.needs_fetch(&key, now + Duration::from_secs(10)));
		assert!(cache.needs_fetch(&key, now + FRESHNESS_WINDOW));
	}

	#[test]
	fn invalidation_bypasses_freshness() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Ok(page_with(42)), now);

		cache.invalidate(&key);
		assert!(cache.needs_fetch(&key, now));
		// The stale page is still visible until the refetch resolves.
		assert!(matches!(cache.lookup(&key), CacheView::Ready(_)));
	}

	#[test]
	fn refetch_shows_previous_page_as_placeholder() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Ok(page_with(42)), now);

		cache.begin(key.clone(), 2);
		match cache.lookup(&key) {
			CacheView::Loading {
				placeholder: Some(page),
			} => assert_eq!(page.total_pages, 42),
			other => panic!("expected loading with placeholder, got {other:?}"),
		}
	}

	#[test]
	fn failure_is_reported_and_needs_a_fetch() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Err(server_error()), now);

		match cache.lookup(&key) {
			CacheView::Failed(FetchError::RequestFailed { status: 500, .. }) => {}
			other => panic!("expected failed view, got {other:?}"),
		}
		assert!(cache.needs_fetch(&key, now));
	}

	#[test]
	fn auto_retry_budget_is_bounded() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Err(server_error()), now);

		assert!(cache.try_auto_retry(&key));
		assert!(cache.try_auto_retry(&key));
		assert!(!cache.try_auto_retry(&key));

		// Manual invalidation restores the budget.
		cache.invalidate(&key);
		assert!(cache.try_auto_retry(&key));
	}

	#[test]
	fn non_retryable_failures_are_never_auto_retried() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		cache.begin(key.clone(), 1);
		cache.complete(
			key.clone(),
			1,
			Err(FetchError::DetailNotFound { id: 3 }),
			Instant::now(),
		);
		assert!(!cache.try_auto_retry(&key));
	}

	#[test]
	fn stale_response_populates_without_clearing_newer_in_flight() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		let now = Instant::now();
		cache.begin(key.clone(), 1);
		cache.begin(key.clone(), 2);

		// Request 1 resolves after request 2 was issued for the same key.
		cache.complete(key.clone(), 1, Ok(page_with(7)), now);

		// The entry holds data, but the newer request is still outstanding.
		match cache.lookup(&key) {
			CacheView::Loading {
				placeholder: Some(page),
			} => assert_eq!(page.total_pages, 7),
			other => panic!("expected loading with placeholder, got {other:?}"),
		}
		assert!(!cache.needs_fetch(&key, now));
	}

	#[test]
	fn skipped_requests_clear_only_their_own_marker() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		cache.begin(key.clone(), 1);
		cache.begin(key.clone(), 2);

		cache.skipped(&key, 1);
		assert!(matches!(cache.lookup(&key), CacheView::Loading { .. }));

		cache.skipped(&key, 2);
		assert!(matches!(cache.lookup(&key), CacheView::Empty));
	}

	#[test]
	fn reset_clears_all_entries() {
		let mut cache = QueryCache::new();
		let key = QueryKey::new(1, "");
		cache.begin(key.clone(), 1);
		cache.complete(key.clone(), 1, Ok(page_with(1)), Instant::now());
		cache.reset();
		assert!(matches!(cache.lookup(&key), CacheView::Empty));
	}
}
