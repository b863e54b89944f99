//! Data models for the site.
//!
//! - [`Dataset`], [`Topic`], [`Paragraph`], [`QaPair`], [`Answer`] - the
//!   SQuAD-format wire model
//! - [`PreviewItem`], [`PreviewState`] - derived display types for the
//!   preview region

mod dataset;
mod preview;

pub use dataset::{Answer, Dataset, Paragraph, QaPair, Topic};
pub use preview::{PreviewItem, PreviewState};
