// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for boosting and ranking.
//!
//! Debug-mode assertions for the properties the ranking pass promises. They
//! compile to nothing in release builds and fail loudly in tests.
//!
//! | Contract Function            | Property                                   |
//! |------------------------------|--------------------------------------------|
//! | `check_sorted_descending`    | Effective scores never increase            |
//! | `check_count_preserved`      | Ranking adds and drops nothing             |
//! | `check_unscored_untouched`   | Absent scores stay absent                  |
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)

use crate::document::Document;

/// Check that effective scores are in descending order.
///
/// NaN scores are incomparable and skipped.
///
/// # Panics (debug builds only)
/// Panics if some document outranks a document with a higher effective score.
#[inline]
pub fn check_sorted_descending(documents: &[Document]) {
    for (i, pair) in documents.windows(2).enumerate() {
        let (a, b) = (pair[0].effective_score(), pair[1].effective_score());
        debug_assert!(
            a >= b || a.is_nan() || b.is_nan(),
            "Contract violation: ranking not descending at position {}: {} < {}",
            i,
            a,
            b
        );
    }
}

/// Check that ranking returned as many documents as it was given.
#[inline]
pub fn check_count_preserved(input_len: usize, documents: &[Document]) {
    debug_assert_eq!(
        input_len,
        documents.len(),
        "Contract violation: ranking changed document count"
    );
}

/// Check that every document unscored on input is still unscored on output.
///
/// `before` and `after` are matched by position, so call this before sorting.
#[inline]
pub fn check_unscored_untouched(before: &[Option<f64>], after: &[Document]) {
    for (i, (score, doc)) in before.iter().zip(after).enumerate() {
        if score.is_none() {
            debug_assert!(
                doc.score.is_none(),
                "Contract violation: unscored document {} was given score {:?}",
                i,
                doc.score
            );
        }
    }
}
