//! Reusable widgets for the browse and detail screens.

pub mod about;
pub mod detail;
pub mod pagination;
pub mod prompt;
pub mod status;
pub mod table;

pub use detail::DetailContent;
pub use pagination::visible_window;
