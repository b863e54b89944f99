//! View-facing types for the dataset preview.

/// A derived, flattened (question, truncated context, answer) triple used
/// only for display. Built by the preview traversal; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewItem {
    /// The question text.
    pub question: String,
    /// Truncated context excerpt, ellipsis marker included.
    pub context_snippet: String,
    /// Text of the first candidate answer.
    pub answer: String,
}

/// State of the preview region.
///
/// One success branch and two final fallback branches, plus the placeholder
/// shown while the fetch is in flight. The region renders exactly one of
/// these at a time; a state change replaces the previous output wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// Fetch in flight; placeholder text shown.
    Loading,
    /// Between one and three items collected, in document order.
    Ready(Vec<PreviewItem>),
    /// Document parsed but contained no question/answer pairs.
    Empty,
    /// Retrieval or parsing failed; the single error message is shown.
    Failed,
}

impl PreviewState {
    /// Classify a collected item list: zero items is the no-data branch.
    pub fn from_items(items: Vec<PreviewItem>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Ready(items)
        }
    }
}
