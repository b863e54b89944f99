//! UI components built with Leptos.
//!
//! - [`navbar`] - top navigation with smooth-scroll section links
//! - [`overview`] - dataset description and statistics strip
//! - [`preview`] - dataset preview pipeline (fetch, derive, render)
//! - [`download`] - dataset file download section
//! - [`footer`] - page footer
//! - [`icons`] - centralized icon definitions

pub mod download;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod overview;
pub mod preview;

pub use download::Download;
pub use footer::Footer;
pub use navbar::Navbar;
pub use overview::Overview;
pub use preview::Preview;
