//! Character records, paged results, and the cache addressing key.

use serde::{Deserialize, Serialize};

/// A single character record as returned by the upstream API.
///
/// Records are immutable once fetched; a refetch replaces the whole page
/// they belong to rather than patching individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
	/// Stable unique identifier assigned by the upstream API.
	pub id: u64,
	pub name: String,
	pub status: String,
	pub species: String,
	/// URL of the character portrait.
	pub image: String,
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
	pub count: u64,
	pub pages: u64,
	pub next: Option<String>,
	pub prev: Option<String>,
}

/// Wire shape of the list endpoint body.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
	#[serde(default)]
	pub results: Vec<Character>,
	pub info: PageInfo,
}

/// One page of query results, derived wholesale from a single gateway
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPage {
	pub items: Vec<Character>,
	pub total_count: u64,
	/// Always at least 1, even for empty result sets.
	pub total_pages: u64,
}

impl CharacterPage {
	/// The page representing "no matches": zero items, one page.
	#[must_use]
	pub fn empty() -> Self {
		Self {
			items: Vec::new(),
			total_count: 0,
			total_pages: 1,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl From<ListResponse> for CharacterPage {
	fn from(response: ListResponse) -> Self {
		Self {
			items: response.results,
			total_count: response.info.count,
			total_pages: response.info.pages.max(1),
		}
	}
}

/// Addresses one result set: a page number plus the search term that
/// produced it.
///
/// The term is trimmed at construction so that two keys differing only in
/// surrounding whitespace address the same cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
	page: u64,
	term: String,
}

impl QueryKey {
	/// Build a key for `page` and `term`, trimming the term.
	#[must_use]
	pub fn new(page: u64, term: &str) -> Self {
		Self {
			page,
			term: term.trim().to_string(),
		}
	}

	#[must_use]
	pub fn page(&self) -> u64 {
		self.page
	}

	#[must_use]
	pub fn term(&self) -> &str {
		&self.term
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn character(id: u64) -> Character {
		Character {
			id,
			name: format!("Character {id}"),
			status: "Alive".to_string(),
			species: "Human".to_string(),
			image: format!("https://example.test/avatar/{id}.png"),
		}
	}

	#[test]
	fn query_key_trims_term() {
		assert_eq!(QueryKey::new(1, "  rick  "), QueryKey::new(1, "rick"));
		assert_eq!(QueryKey::new(1, "  rick  ").term(), "rick");
	}

	#[test]
	fn query_key_distinguishes_page_and_term() {
		assert_ne!(QueryKey::new(1, "rick"), QueryKey::new(2, "rick"));
		assert_ne!(QueryKey::new(1, "rick"), QueryKey::new(1, "morty"));
	}

	#[test]
	fn page_from_response_clamps_total_pages() {
		let response = ListResponse {
			results: vec![character(1)],
			info: PageInfo {
				count: 1,
				pages: 0,
				next: None,
				prev: None,
			},
		};
		let page = CharacterPage::from(response);
		assert_eq!(page.total_pages, 1);
		assert_eq!(page.total_count, 1);
	}

	#[test]
	fn empty_page_has_one_total_page() {
		let page = CharacterPage::empty();
		assert!(page.is_empty());
		assert_eq!(page.total_count, 0);
		assert_eq!(page.total_pages, 1);
	}
}
