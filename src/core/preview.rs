//! Bounded preview extraction from the dataset document.
//!
//! The one real routine on this site: flatten the three-level document
//! (topics, paragraphs, questions) into at most [`PREVIEW_LIMIT`] display
//! triples without ever materializing the full cross-product.
//!
//! [`PREVIEW_LIMIT`]: crate::config::PREVIEW_LIMIT

use crate::config::{CONTEXT_SNIPPET_LEN, SNIPPET_ELLIPSIS};
use crate::core::error::PreviewError;
use crate::models::{Dataset, Paragraph, PreviewItem, QaPair};

/// Collect up to `limit` preview items, in document order: topics, then
/// paragraphs within a topic, then questions within a paragraph.
///
/// The flattening iterator is lazy, so the `take` bounds the walk at all
/// three nesting levels: once the limit is reached, no further topic,
/// paragraph, or question is examined.
///
/// A question with no answers inside the window is malformed content and
/// fails the whole collection; the caller collapses that into the single
/// error branch. The same question past the window is never looked at.
pub fn collect_preview(dataset: &Dataset, limit: usize) -> Result<Vec<PreviewItem>, PreviewError> {
    dataset
        .data
        .iter()
        .flat_map(|topic| topic.paragraphs.iter())
        .flat_map(|paragraph| paragraph.qas.iter().map(move |qa| (paragraph, qa)))
        .take(limit)
        .map(|(paragraph, qa)| derive_item(paragraph, qa))
        .collect()
}

/// Derive one display triple from a question and its enclosing paragraph.
fn derive_item(paragraph: &Paragraph, qa: &QaPair) -> Result<PreviewItem, PreviewError> {
    let answer = qa
        .answers
        .first()
        .ok_or_else(|| PreviewError::MissingAnswer {
            question: qa.question.clone(),
        })?;

    Ok(PreviewItem {
        question: qa.question.clone(),
        context_snippet: truncate_context(&paragraph.context),
        answer: answer.text.clone(),
    })
}

/// First [`CONTEXT_SNIPPET_LEN`] characters of a context with the ellipsis
/// marker appended. The marker is unconditional; contexts already shorter
/// than the cut-off still get it. Counts chars, not bytes, since contexts
/// are arbitrary text.
pub fn truncate_context(context: &str) -> String {
    let mut snippet: String = context.chars().take(CONTEXT_SNIPPET_LEN).collect();
    snippet.push_str(SNIPPET_ELLIPSIS);
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: serde_json::Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    fn qa(question: &str, answers: &[&str]) -> serde_json::Value {
        let answers: Vec<_> = answers.iter().map(|text| json!({ "text": text })).collect();
        json!({ "question": question, "answers": answers })
    }

    fn paragraph(context: &str, qas: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "context": context, "qas": qas })
    }

    fn topic(paragraphs: Vec<serde_json::Value>) -> serde_json::Value {
        json!({ "paragraphs": paragraphs })
    }

    #[test]
    fn test_three_items_in_document_order() {
        let ds = dataset(json!({
            "data": [
                topic(vec![
                    paragraph("first context", vec![qa("q1", &["a1"]), qa("q2", &["a2"])]),
                    paragraph("second context", vec![qa("q3", &["a3"])]),
                ]),
                topic(vec![paragraph("third context", vec![qa("q4", &["a4"])])]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].question, "q1");
        assert_eq!(items[1].question, "q2");
        assert_eq!(items[2].question, "q3");
        // The first two share the first paragraph's context.
        assert_eq!(items[0].context_snippet, "first context...");
        assert_eq!(items[1].context_snippet, "first context...");
        assert_eq!(items[2].context_snippet, "second context...");
    }

    #[test]
    fn test_limit_spans_topics() {
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph("ctx a", vec![qa("q1", &["a1"])])]),
                topic(vec![paragraph("ctx b", vec![qa("q2", &["a2"])])]),
                topic(vec![paragraph("ctx c", vec![qa("q3", &["a3"])])]),
                topic(vec![paragraph("ctx d", vec![qa("q4", &["a4"])])]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].question, "q3");
    }

    #[test]
    fn test_fewer_questions_than_limit() {
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph("ctx", vec![qa("q1", &["a1"]), qa("q2", &["a2"])])]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_empty_document() {
        let ds = dataset(json!({ "data": [] }));
        assert!(collect_preview(&ds, 3).unwrap().is_empty());
    }

    #[test]
    fn test_empty_nested_sequences() {
        // Topics and paragraphs exist but no question survives anywhere.
        let ds = dataset(json!({
            "data": [
                topic(vec![]),
                topic(vec![paragraph("ctx", vec![])]),
            ]
        }));

        assert!(collect_preview(&ds, 3).unwrap().is_empty());
    }

    #[test]
    fn test_item_fields_from_long_context() {
        let long_context = "a".repeat(200);
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph(&long_context, vec![qa("Q1", &["Ans1", "Ans2"])])]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].question, "Q1");
        assert_eq!(items[0].context_snippet, format!("{}...", "a".repeat(150)));
        assert_eq!(items[0].answer, "Ans1");
    }

    #[test]
    fn test_first_answer_wins() {
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph("ctx", vec![qa("q", &["first", "second", "third"])])]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items[0].answer, "first");
    }

    #[test]
    fn test_missing_answer_inside_window_fails() {
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph("ctx", vec![qa("q1", &["a1"]), qa("q2", &[])])]),
            ]
        }));

        let err = collect_preview(&ds, 3).unwrap_err();
        assert_eq!(
            err,
            PreviewError::MissingAnswer {
                question: "q2".to_string()
            }
        );
    }

    #[test]
    fn test_missing_answer_past_window_never_examined() {
        // The fourth question is malformed, but the walk stops at three.
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph(
                    "ctx",
                    vec![qa("q1", &["a1"]), qa("q2", &["a2"]), qa("q3", &["a3"]), qa("q4", &[])],
                )]),
            ]
        }));

        let items = collect_preview(&ds, 3).unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_malformed_later_topic_past_window_never_examined() {
        let ds = dataset(json!({
            "data": [
                topic(vec![paragraph(
                    "ctx",
                    vec![qa("q1", &["a1"]), qa("q2", &["a2"]), qa("q3", &["a3"])],
                )]),
                topic(vec![paragraph("later", vec![qa("q4", &[])])]),
            ]
        }));

        assert!(collect_preview(&ds, 3).is_ok());
    }

    #[test]
    fn test_truncation_marker_unconditional() {
        assert_eq!(truncate_context("short context"), "short context...");
        assert_eq!(truncate_context(""), "...");
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        // 200 two-byte chars; byte slicing at 150 would split a boundary.
        let context = "é".repeat(200);
        let snippet = truncate_context(&context);
        assert_eq!(snippet.chars().count(), 150 + 3);
        assert!(snippet.ends_with("..."));
        assert!(snippet.starts_with("ééé"));
    }

    #[test]
    fn test_truncation_at_exact_boundary() {
        let context = "b".repeat(150);
        assert_eq!(truncate_context(&context), format!("{}...", "b".repeat(150)));
    }
}
