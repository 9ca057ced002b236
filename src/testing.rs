//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::document::Document;

/// Create a scored test document.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(content: &str, score: f64) -> Document {
    Document::new(content, score)
}

/// Create a test document with content but no score.
pub fn make_unscored(content: &str) -> Document {
    Document::unscored(content)
}

/// Create a scored test document with no content.
pub fn make_empty(score: f64) -> Document {
    Document {
        score: Some(score),
        ..Document::default()
    }
}

/// Content of each document, in order. Missing content shows as `""`.
pub fn contents(documents: &[Document]) -> Vec<&str> {
    documents
        .iter()
        .map(|doc| doc.content.as_deref().unwrap_or(""))
        .collect()
}

/// Score of each document, in order.
pub fn scores(documents: &[Document]) -> Vec<Option<f64>> {
    documents.iter().map(|doc| doc.score).collect()
}

/// Assert two floats are within `1e-9` of each other.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
