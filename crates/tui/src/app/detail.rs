//! State for the detail pane.

use rolodex_core::error::FetchError;
use rolodex_core::model::Character;

use crate::components::detail::DetailContent;

/// One open detail pane: which record it shows and the request that feeds
/// it.
#[derive(Debug)]
pub(crate) struct DetailState {
	character_id: u64,
	request_id: u64,
	pub(crate) content: DetailContent,
}

impl DetailState {
	pub(crate) fn open(character_id: u64, request_id: u64) -> Self {
		Self {
			character_id,
			request_id,
			content: DetailContent::Loading,
		}
	}

	/// Whether a worker response belongs to this pane.
	pub(crate) fn accepts(&self, request_id: u64, character_id: u64) -> bool {
		self.request_id == request_id && self.character_id == character_id
	}

	pub(crate) fn apply(&mut self, result: Result<Character, FetchError>) {
		self.content = match result {
			Ok(record) => DetailContent::Ready(record),
			Err(err) => DetailContent::Failed(err.to_string()),
		};
	}
}
