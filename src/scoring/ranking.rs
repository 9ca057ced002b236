// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boost application and result ranking.
//!
//! Two passes. The first multiplies each scored document by every rule that
//! matches its content, in rule-set order. The second sorts by effective score,
//! descending, with a stable sort so that ties keep the retriever's order.
//!
//! Multiplying in rule order (rather than folding the rules into one product
//! first) keeps the floating-point result identical to applying each rule as a
//! separate pass over the batch.

use crate::contracts::{check_count_preserved, check_sorted_descending, check_unscored_untouched};
use crate::document::{compare_by_score, Document};
use crate::scoring::rules::RuleSet;

/// What a boosting pass did to a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoostStats {
    /// Documents whose score was multiplied by at least one rule.
    pub boosted: usize,
    /// Documents skipped because they carry no score.
    pub unscored: usize,
}

/// Multiply each document's score by every matching rule's multiplier.
///
/// Documents without a score are skipped entirely. Documents without content
/// match nothing. Only `score` is written.
pub fn apply_boosts(documents: &mut [Document], rules: &RuleSet) -> BoostStats {
    let mut stats = BoostStats::default();

    for doc in documents.iter_mut() {
        let Some(mut score) = doc.score else {
            stats.unscored += 1;
            continue;
        };

        let content = doc.content.as_deref();
        let mut matched = false;
        for rule in rules {
            if rule.matches(content) {
                tracing::trace!(
                    pattern = rule.pattern(),
                    boost = rule.boost(),
                    before = score,
                    "boost rule matched"
                );
                score *= rule.boost();
                matched = true;
            }
        }

        if matched {
            doc.score = Some(score);
            stats.boosted += 1;
        }
    }

    stats
}

/// Sort documents by effective score, highest first. Ties keep input order.
pub fn rank(documents: &mut [Document]) {
    documents.sort_by(compare_by_score);
    check_sorted_descending(documents);
}

/// Boost every document, then rank the batch.
///
/// Returns the same documents, with updated scores, in ranked order.
pub fn score_and_sort(mut documents: Vec<Document>, rules: &RuleSet) -> Vec<Document> {
    let input_len = documents.len();
    let before: Vec<Option<f64>> = if cfg!(debug_assertions) {
        documents.iter().map(|doc| doc.score).collect()
    } else {
        Vec::new()
    };

    let stats = apply_boosts(&mut documents, rules);
    check_unscored_untouched(&before, &documents);
    rank(&mut documents);

    check_count_preserved(input_len, &documents);
    tracing::debug!(
        documents = documents.len(),
        boosted = stats.boosted,
        unscored = stats.unscored,
        "boosted and ranked documents"
    );

    documents
}
