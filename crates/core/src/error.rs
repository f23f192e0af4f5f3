//! Failure taxonomy for gateway fetches.

use thiserror::Error;

/// Errors produced by the [`ApiGateway`](crate::gateway::ApiGateway).
///
/// A 404 from the list endpoint is deliberately absent: the upstream API
/// answers 404 for searches with zero matches, so the gateway maps it to an
/// empty page instead of an error. A 404 from the detail endpoint is a
/// genuine not-found and keeps its own variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
	/// The server answered with a non-success status.
	#[error("request failed with status {status} {reason}")]
	RequestFailed { status: u16, reason: String },

	/// No response was received at all.
	#[error("network failure: {0}")]
	NetworkFailure(String),

	/// The detail endpoint reported that no record exists for this id.
	#[error("no character with id {id}")]
	DetailNotFound { id: u64 },
}

impl FetchError {
	/// Whether re-issuing the same request could plausibly succeed.
	///
	/// A missing detail record stays missing; everything else is worth a
	/// bounded number of retries.
	#[must_use]
	pub fn retryable(&self) -> bool {
		!matches!(self, Self::DetailNotFound { .. })
	}
}
