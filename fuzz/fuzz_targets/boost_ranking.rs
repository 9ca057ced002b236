// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for boost-and-rank invariants.
//!
//! Arbitrary patterns, boosts, contents, and scores. Construction may reject
//! the rules; once it accepts them, `run` must never panic, must return every
//! document it was given, must rank by effective score, and must leave
//! unscored documents unscored.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use regex_booster::{Document, RegexBooster};

#[derive(Arbitrary, Debug)]
struct Input {
    rules: Vec<(String, f64)>,
    documents: Vec<(Option<String>, Option<f64>)>,
}

fuzz_target!(|input: Input| {
    // Cap sizes so pathological patterns don't dominate the run.
    if input.rules.len() > 8 || input.documents.len() > 64 {
        return;
    }
    if input.rules.iter().any(|(pattern, _)| pattern.len() > 64) {
        return;
    }

    let Ok(booster) = RegexBooster::new(input.rules) else {
        return;
    };

    let documents: Vec<Document> = input
        .documents
        .into_iter()
        .enumerate()
        .map(|(i, (content, score))| Document {
            id: i.to_string(),
            content,
            score,
            ..Document::default()
        })
        .collect();
    let unscored: Vec<String> = documents
        .iter()
        .filter(|doc| doc.score.is_none())
        .map(|doc| doc.id.clone())
        .collect();

    let first = booster.run(documents.clone()).documents;
    let second = booster.run(documents.clone()).documents;

    // INVARIANT 1: Nothing added or dropped
    assert_eq!(first.len(), documents.len(), "Document count changed");

    // INVARIANT 2: Effective scores never increase down the list
    for pair in first.windows(2) {
        let (a, b) = (pair[0].effective_score(), pair[1].effective_score());
        assert!(a >= b || a.is_nan() || b.is_nan(), "Ranking not descending: {} < {}", a, b);
    }

    // INVARIANT 3: Unscored documents stay unscored
    for doc in &first {
        if unscored.contains(&doc.id) {
            assert!(doc.score.is_none(), "Unscored document {} was scored", doc.id);
        }
    }

    // INVARIANT 4: Deterministic
    let ids = |docs: &[Document]| docs.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second), "Order changed between runs");
});
