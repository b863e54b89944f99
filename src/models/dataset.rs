//! Wire model for the SQuAD-format dataset document.
//!
//! The document is a single JSON object holding the topic list under the
//! fixed field name `data`. Every level is an ordered sequence; ordering is
//! what the preview traversal relies on. All fields below are required, so
//! a document missing one of them fails deserialization and surfaces as the
//! single preview error. Fields this site does not use (SQuAD's `title`,
//! `id`, `answer_start`, `is_impossible`) are ignored by serde, so real
//! SQuAD files parse unchanged.

use serde::Deserialize;

/// Root dataset document.
#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    /// Topic entries, in document order.
    pub data: Vec<Topic>,
}

/// Top-level grouping of paragraphs.
#[derive(Clone, Debug, Deserialize)]
pub struct Topic {
    /// Paragraph entries, in document order.
    pub paragraphs: Vec<Paragraph>,
}

/// A context passage paired with its question/answer sets.
#[derive(Clone, Debug, Deserialize)]
pub struct Paragraph {
    /// The context passage the questions refer to.
    pub context: String,
    /// Question/answer pairs, in document order.
    pub qas: Vec<QaPair>,
}

/// A question together with its candidate answers.
#[derive(Clone, Debug, Deserialize)]
pub struct QaPair {
    /// The natural-language question.
    pub question: String,
    /// Candidate answers; the preview only ever reads the first.
    pub answers: Vec<Answer>,
}

/// A single candidate answer.
#[derive(Clone, Debug, Deserialize)]
pub struct Answer {
    /// The answer text.
    pub text: String,
}
