// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record that flows through a retrieval pipeline.
//!
//! A `Document` is owned by the caller. The booster reads `content`, rewrites
//! `score`, and carries `id` and `meta` through untouched. Both `content` and
//! `score` are optional because upstream stages are allowed to leave them out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A scored document as produced by a retriever.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier assigned upstream.
    #[serde(default)]
    pub id: String,
    /// Text matched against boost patterns. `None` never matches.
    #[serde(default)]
    pub content: Option<String>,
    /// Relevance score. `None` is never boosted and ranks as 0.
    #[serde(default)]
    pub score: Option<f64>,
    /// Arbitrary metadata, passed through unchanged.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl Document {
    /// A document with content and a score.
    pub fn new(content: impl Into<String>, score: f64) -> Self {
        Self {
            content: Some(content.into()),
            score: Some(score),
            ..Self::default()
        }
    }

    /// A document with content but no score.
    pub fn unscored(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Score used for ordering: the stored score, or 0 when absent.
    ///
    /// Only the sort key substitutes 0. The stored score is left as `None`.
    #[inline]
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Compare two documents for ranking: higher effective score first.
///
/// A NaN score ranks below everything else, so the comparison stays a total
/// order and NaN cannot float to the top of the results.
#[inline]
pub fn compare_by_score(a: &Document, b: &Document) -> Ordering {
    let key = |doc: &Document| {
        let score = doc.effective_score();
        if score.is_nan() {
            f64::NEG_INFINITY
        } else {
            score
        }
    };
    key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal)
}
