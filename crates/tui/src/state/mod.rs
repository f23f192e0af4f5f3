//! Shared mutable state containers used by the application.

mod results;
mod selection;

pub use results::ResultsState;
pub use selection::SelectionStore;
