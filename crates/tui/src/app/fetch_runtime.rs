//! Thin wrapper around the fetch worker channels.
//!
//! Sequences request ids and publishes the latest page-request id so the
//! worker can drop page fetches that were superseded while still queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use rolodex_core::gateway::ApiGateway;
use rolodex_core::model::QueryKey;
use rolodex_core::{FetchCommand, FetchResult, fetch};

pub(crate) struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResult>,
	latest_page_id: Arc<AtomicU64>,
	next_request_id: u64,
}

impl FetchRuntime {
	/// Spawn the worker thread for `gateway` and wrap its channels.
	pub(crate) fn spawn(gateway: ApiGateway) -> Self {
		let (tx, rx, latest_page_id) = fetch::spawn(gateway);
		Self::new(tx, rx, latest_page_id)
	}

	/// Wrap existing channels. Lets tests drive the runtime without a
	/// worker thread.
	pub(crate) fn new(
		tx: Sender<FetchCommand>,
		rx: Receiver<FetchResult>,
		latest_page_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_page_id,
			next_request_id: 0,
		}
	}

	/// Issue a page fetch and return its request id.
	pub(crate) fn issue_page(&mut self, key: QueryKey) -> u64 {
		let id = self.next_id();
		self.latest_page_id.store(id, Ordering::Release);
		let _ = self.tx.send(FetchCommand::Page { id, key });
		id
	}

	/// Issue a detail fetch and return its request id.
	pub(crate) fn issue_detail(&mut self, character_id: u64) -> u64 {
		let id = self.next_id();
		let _ = self.tx.send(FetchCommand::Detail { id, character_id });
		id
	}

	pub(crate) fn try_recv(&self) -> Result<FetchResult, TryRecvError> {
		self.rx.try_recv()
	}

	fn next_id(&mut self) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		self.next_request_id
	}

	fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
