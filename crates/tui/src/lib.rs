//! Interactive terminal UI for `rolodex`.
//!
//! This crate contains the full TUI application: the event loop, the
//! application state machine that coordinates the query cache and fetch
//! worker, rendering for the browse/detail/about screens, and the reusable
//! widgets and themes that power them.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod state;
pub mod style;

pub use app::{App, BrowseOutcome};
pub use input::SearchInput;
pub use runtime::run;
pub use state::SelectionStore;
pub use style::{StyleConfig, Theme, default_theme, theme_names};
