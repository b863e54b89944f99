//! Centralized icon definitions.
//!
//! Maps semantic icon names to the bootstrap set so components never
//! reference a concrete glyph directly.

use icondata::Icon;

/// Navbar brand mark.
pub const BRAND: Icon = icondata::BsFileEarmarkText;

/// Question count statistic.
pub const QUESTIONS: Icon = icondata::BsQuestionCircle;

/// Context passage count statistic.
pub const PASSAGES: Icon = icondata::BsListUl;

/// Topic count statistic.
pub const TOPICS: Icon = icondata::BsGrid;

/// Dataset download button.
pub const DOWNLOAD: Icon = icondata::BsDownload;
