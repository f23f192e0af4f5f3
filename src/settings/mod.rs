//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it merges configuration files,
//! environment variables, and CLI arguments into a [`ResolvedConfig`] that
//! the workflow consumes.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
