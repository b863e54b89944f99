//! Utility modules for web, DOM, and display operations.
//!
//! Provides:
//! - [`fetch_json`] - network fetching with timeout
//! - [`scroll_to_section`] - smooth scrolling for section navigation
//! - [`format_number`] - thousands-separator formatting for statistics

pub mod dom;
mod fetch;
mod format;

pub use dom::scroll_to_section;
pub use fetch::fetch_json;
pub use format::format_number;
