//! Core logic for the dataset preview.
//!
//! This module provides:
//! - [`collect_preview`] - bounded flattening of the dataset document
//! - [`truncate_context`] - unconditional context excerpt truncation
//! - [`FetchError`], [`PreviewError`] - typed causes behind the single
//!   user-visible failure message

pub mod error;
mod preview;

pub use error::{FetchError, PreviewError};
pub use preview::{collect_preview, truncate_context};
