//! Site configuration constants.
//!
//! Centralizes the fixed symbolic names used throughout the site: the
//! dataset location, preview bounds, fallback message texts, and the
//! section ids the navigation scrolls to.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site title shown in the navbar brand and page header.
pub const APP_NAME: &str = "Question Answering Dataset";

/// Application version.
pub const APP_VERSION: &str = "0.1.0";

/// Tagline displayed under the page title.
pub const APP_TAGLINE: &str =
    "Context passages, questions, and answers for training reading comprehension systems";

// =============================================================================
// Dataset Configuration
// =============================================================================

/// Site-relative location of the dataset document.
pub const DATASET_URL: &str = "squad_format.json";

/// Maximum number of question/context/answer triples shown in the preview.
pub const PREVIEW_LIMIT: usize = 3;

/// Context characters kept in a preview snippet before the ellipsis.
pub const CONTEXT_SNIPPET_LEN: usize = 150;

/// Marker appended to every context snippet. Always appended, even when the
/// context is shorter than [`CONTEXT_SNIPPET_LEN`]; the preview always reads
/// as an excerpt.
pub const SNIPPET_ELLIPSIS: &str = "...";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// User-Visible Messages
// =============================================================================

/// Placeholder shown while the dataset fetch is in flight.
pub const PREVIEW_LOADING_MESSAGE: &str = "Loading dataset preview...";

/// Single message shown for any retrieval or parse failure.
pub const PREVIEW_ERROR_MESSAGE: &str =
    "Error loading dataset preview. Please check if the dataset file exists.";

/// Message shown when the document contains no question/answer pairs.
pub const PREVIEW_EMPTY_MESSAGE: &str = "No data available for preview.";

// =============================================================================
// Page Sections
// =============================================================================

/// Element ids the navbar links smooth-scroll to.
pub mod sections {
    /// Overview section with the dataset description and statistics.
    pub const OVERVIEW: &str = "overview";
    /// Preview section; the preview items render inside this region.
    pub const PREVIEW: &str = "dataset-preview";
    /// Download section with the dataset file link.
    pub const DOWNLOAD: &str = "download";
}

// =============================================================================
// Dataset Statistics
// =============================================================================

/// Headline numbers shown in the overview strip. These describe the full
/// published dataset and are independent of the preview fetch.
pub mod stats {
    /// Total question/answer pairs in the dataset.
    pub const QUESTIONS: u64 = 12500;
    /// Total context passages.
    pub const PASSAGES: u64 = 3200;
    /// Total topics.
    pub const TOPICS: u64 = 480;
}
