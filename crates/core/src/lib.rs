//! Core data and networking layer for `rolodex`.
//!
//! This crate owns everything that is not terminal rendering: the character
//! data model, the HTTP gateway to the upstream API, the background fetch
//! worker, the keyed query cache, durable user preferences, and logging
//! setup. The TUI crate consumes these pieces without knowing how requests
//! are issued or where preferences live on disk.

pub mod app_dirs;
pub mod cache;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod prefs;

pub use cache::{CacheView, QueryCache};
pub use error::FetchError;
pub use fetch::{FetchCommand, FetchResult};
pub use gateway::{ApiGateway, DEFAULT_BASE_URL};
pub use model::{Character, CharacterPage, QueryKey};
pub use prefs::Preferences;
