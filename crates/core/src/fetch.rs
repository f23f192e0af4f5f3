//! Background fetch worker thread and command infrastructure.
//!
//! Network calls run on a dedicated thread so the UI loop never blocks.
//! Every request carries an id that the UI uses to correlate responses with
//! the query that issued them; the shared latest-id counter lets the worker
//! drop page requests that were superseded while still queued.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::error::FetchError;
use crate::gateway::ApiGateway;
use crate::model::{Character, CharacterPage, QueryKey};

/// Commands understood by the fetch worker.
#[derive(Debug)]
pub enum FetchCommand {
	/// Fetch one page of the character listing.
	Page {
		/// Identifier correlating the response with the originating query.
		id: u64,
		/// The page/term pair to fetch.
		key: QueryKey,
	},
	/// Fetch a single character by id for the detail pane.
	Detail { id: u64, character_id: u64 },
	/// Stop the worker thread.
	Shutdown,
}

/// Responses produced by the fetch worker.
#[derive(Debug)]
pub enum FetchResult {
	Page {
		id: u64,
		key: QueryKey,
		result: Result<CharacterPage, FetchError>,
	},
	Detail {
		id: u64,
		character_id: u64,
		result: Result<Character, FetchError>,
	},
	/// A queued page request was superseded before it reached the network.
	Skipped { id: u64, key: QueryKey },
}

/// Launch the fetch worker and return its communication channels.
///
/// The returned counter holds the id of the most recently issued page
/// request; callers store into it when issuing and the worker compares
/// against it before spending a network round trip.
pub fn spawn(
	gateway: ApiGateway,
) -> (
	Sender<FetchCommand>,
	Receiver<FetchResult>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_page_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_page_id);

	thread::spawn(move || worker_loop(&gateway, &command_rx, &result_tx, &thread_latest));

	(command_tx, result_rx, latest_page_id)
}

fn worker_loop(
	gateway: &ApiGateway,
	command_rx: &Receiver<FetchCommand>,
	result_tx: &Sender<FetchResult>,
	latest_page_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(gateway, result_tx, latest_page_id, command) {
			break;
		}
	}
	debug!("fetch worker stopped");
}

fn handle_command(
	gateway: &ApiGateway,
	result_tx: &Sender<FetchResult>,
	latest_page_id: &AtomicU64,
	command: FetchCommand,
) -> bool {
	match command {
		FetchCommand::Page { id, key } => {
			if latest_page_id.load(Ordering::Acquire) != id {
				debug!(id, "skipping superseded page request");
				return result_tx.send(FetchResult::Skipped { id, key }).is_ok();
			}
			let result = gateway.fetch_page(key.page(), key.term());
			result_tx.send(FetchResult::Page { id, key, result }).is_ok()
		}
		FetchCommand::Detail { id, character_id } => {
			let result = gateway.fetch_detail(character_id);
			result_tx
				.send(FetchResult::Detail {
					id,
					character_id,
					result,
				})
				.is_ok()
		}
		FetchCommand::Shutdown => false,
	}
}
