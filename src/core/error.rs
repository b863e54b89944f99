//! Error types for the preview pipeline.
//!
//! Every variant here collapses into the one user-visible error message;
//! the typed causes exist for the console diagnostics and for tests.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (DNS, CORS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Errors while deriving preview items from a parsed document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreviewError {
    /// A question inside the preview window carried no answers. The wire
    /// model treats the answer list as required but possibly empty, so this
    /// is the malformed-content case the parse step cannot catch.
    #[error("question has no answers: {question:?}")]
    MissingAnswer {
        /// The offending question text, for the console diagnostic.
        question: String,
    },
}
