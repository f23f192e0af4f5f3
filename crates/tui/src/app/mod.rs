//! Application state machine for the browse/detail/about screens.
//!
//! The `app` module bundles the query cache, fetch worker handle, selection
//! store, and UI state into the [`App`] struct, and implements the key
//! handling and cache coordination that drive it.

mod actions;
mod detail;
mod fetch_runtime;
mod fetching;
mod render;
mod state;

pub use state::{App, BrowseOutcome};

pub(crate) use detail::DetailState;
pub(crate) use fetch_runtime::FetchRuntime;
