//! Blocking HTTP gateway to the upstream character API.
//!
//! The gateway performs exactly one request per call and maps HTTP status
//! codes to the outcome the rest of the application reasons about. Retry
//! policy lives with the caller; the cache decides when to re-issue a
//! request.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::model::{Character, CharacterPage, ListResponse};

/// Public endpoint serving the character catalogue.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Thin client for the list and detail endpoints.
pub struct ApiGateway {
	client: Client,
	base_url: Url,
}

impl ApiGateway {
	/// Build a gateway against `base_url`.
	pub fn new(base_url: &str) -> Result<Self> {
		let base_url = Url::parse(base_url)
			.with_context(|| format!("invalid API base URL: {base_url}"))?;
		Ok(Self {
			client: Client::new(),
			base_url,
		})
	}

	/// Fetch one page of the character listing, optionally filtered by name.
	///
	/// A 404 from this endpoint means "zero matches", not an error, and is
	/// returned as the empty page.
	pub fn fetch_page(&self, page: u64, term: &str) -> Result<CharacterPage, FetchError> {
		let url = self.list_url(page, term);
		debug!(%url, "fetching character page");

		let response = self
			.client
			.get(url)
			.send()
			.map_err(|err| network_failure(&err))?;
		let status = response.status();
		let body = response.text().map_err(|err| network_failure(&err))?;

		let outcome = list_outcome(status, &body);
		if let Err(err) = &outcome {
			warn!(%status, error = %err, "character page fetch failed");
		}
		outcome
	}

	/// Fetch a single character by id.
	///
	/// Unlike the list endpoint, a 404 here is a genuine not-found.
	pub fn fetch_detail(&self, id: u64) -> Result<Character, FetchError> {
		let url = self.detail_url(id);
		debug!(%url, "fetching character detail");

		let response = self
			.client
			.get(url)
			.send()
			.map_err(|err| network_failure(&err))?;
		let status = response.status();
		let body = response.text().map_err(|err| network_failure(&err))?;

		let outcome = detail_outcome(status, &body, id);
		if let Err(err) = &outcome {
			warn!(%status, error = %err, "character detail fetch failed");
		}
		outcome
	}

	fn list_url(&self, page: u64, term: &str) -> Url {
		let mut url = self.base_url.clone();
		{
			let mut pairs = url.query_pairs_mut();
			pairs.append_pair("page", &page.to_string());
			let trimmed = term.trim();
			if !trimmed.is_empty() {
				pairs.append_pair("name", trimmed);
			}
		}
		url
	}

	fn detail_url(&self, id: u64) -> Url {
		let mut url = self.base_url.clone();
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(&id.to_string());
		}
		url
	}
}

fn network_failure(err: &reqwest::Error) -> FetchError {
	FetchError::NetworkFailure(err.to_string())
}

fn status_reason(status: StatusCode) -> String {
	status.canonical_reason().unwrap_or("unknown error").to_string()
}

/// Map a list-endpoint response to its outcome.
fn list_outcome(status: StatusCode, body: &str) -> Result<CharacterPage, FetchError> {
	if status == StatusCode::NOT_FOUND {
		return Ok(CharacterPage::empty());
	}
	if !status.is_success() {
		return Err(FetchError::RequestFailed {
			status: status.as_u16(),
			reason: status_reason(status),
		});
	}

	let response: ListResponse =
		serde_json::from_str(body).map_err(|err| FetchError::RequestFailed {
			status: status.as_u16(),
			reason: format!("malformed list body: {err}"),
		})?;
	Ok(CharacterPage::from(response))
}

/// Map a detail-endpoint response to its outcome.
fn detail_outcome(status: StatusCode, body: &str, id: u64) -> Result<Character, FetchError> {
	if status == StatusCode::NOT_FOUND {
		return Err(FetchError::DetailNotFound { id });
	}
	if !status.is_success() {
		return Err(FetchError::RequestFailed {
			status: status.as_u16(),
			reason: status_reason(status),
		});
	}

	serde_json::from_str(body).map_err(|err| FetchError::RequestFailed {
		status: status.as_u16(),
		reason: format!("malformed detail body: {err}"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const LIST_BODY: &str = r#"{
		"info": { "count": 826, "pages": 42, "next": null, "prev": null },
		"results": [
			{
				"id": 1,
				"name": "Rick Sanchez",
				"status": "Alive",
				"species": "Human",
				"image": "https://example.test/avatar/1.jpeg"
			}
		]
	}"#;

	fn gateway() -> ApiGateway {
		ApiGateway::new(DEFAULT_BASE_URL).expect("default base URL parses")
	}

	#[test]
	fn list_url_includes_name_only_when_term_is_non_empty() {
		let gateway = gateway();
		let bare = gateway.list_url(3, "   ");
		assert_eq!(bare.query(), Some("page=3"));

		let filtered = gateway.list_url(1, "  rick ");
		assert_eq!(filtered.query(), Some("page=1&name=rick"));
	}

	#[test]
	fn detail_url_appends_the_id_as_a_path_segment() {
		let gateway = gateway();
		let url = gateway.detail_url(42);
		assert!(url.path().ends_with("/character/42"), "got {}", url.path());
	}

	#[test]
	fn successful_list_body_parses_into_a_page() {
		let page = list_outcome(StatusCode::OK, LIST_BODY).expect("page");
		assert_eq!(page.total_count, 826);
		assert_eq!(page.total_pages, 42);
		assert_eq!(page.items.len(), 1);
		assert_eq!(page.items[0].name, "Rick Sanchez");
	}

	#[test]
	fn list_not_found_is_the_empty_page() {
		let page = list_outcome(StatusCode::NOT_FOUND, "").expect("empty page");
		assert_eq!(page, CharacterPage::empty());
	}

	#[test]
	fn list_server_error_carries_status_and_reason() {
		let err = list_outcome(StatusCode::INTERNAL_SERVER_ERROR, "").unwrap_err();
		assert_eq!(
			err,
			FetchError::RequestFailed {
				status: 500,
				reason: "Internal Server Error".to_string(),
			}
		);
	}

	#[test]
	fn malformed_list_body_is_a_request_failure() {
		let err = list_outcome(StatusCode::OK, "{not json").unwrap_err();
		assert!(matches!(err, FetchError::RequestFailed { status: 200, .. }));
	}

	#[test]
	fn detail_not_found_is_its_own_error() {
		let err = detail_outcome(StatusCode::NOT_FOUND, "", 9).unwrap_err();
		assert_eq!(err, FetchError::DetailNotFound { id: 9 });
		assert!(!err.retryable());
	}

	#[test]
	fn detail_success_parses_a_record() {
		let body = r#"{
			"id": 2,
			"name": "Morty Smith",
			"status": "Alive",
			"species": "Human",
			"image": "https://example.test/avatar/2.jpeg"
		}"#;
		let record = detail_outcome(StatusCode::OK, body, 2).expect("record");
		assert_eq!(record.id, 2);
		assert_eq!(record.name, "Morty Smith");
	}
}
