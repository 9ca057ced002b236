// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boost rules: a compiled pattern and the multiplier it applies.
//!
//! Patterns are compiled once, case-insensitively, when the rule set is built.
//! A bad pattern or a non-positive multiplier is rejected right there, so a
//! `RuleSet` that exists is one that can be applied without failing.
//!
//! Rules are never merged. Two entries with the same pattern text are two
//! rules, and a document matching both is multiplied twice.

use crate::error::{BoostError, Result};
use regex::{Regex, RegexBuilder};

/// One (pattern, multiplier) pair.
#[derive(Debug, Clone)]
pub struct BoostRule {
    pattern: String,
    regex: Regex,
    boost: f64,
}

impl BoostRule {
    /// Compile `pattern` case-insensitively and pair it with `boost`.
    pub fn new(pattern: impl Into<String>, boost: f64) -> Result<Self> {
        let pattern = pattern.into();

        if !boost.is_finite() || boost <= 0.0 {
            tracing::warn!(%pattern, boost, "rejecting non-positive boost");
            return Err(BoostError::InvalidBoost { pattern, boost });
        }

        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(source) => {
                tracing::warn!(%pattern, error = %source, "rejecting invalid boost pattern");
                return Err(BoostError::InvalidPattern { pattern, source });
            }
        };

        Ok(Self {
            pattern,
            regex,
            boost,
        })
    }

    /// Pattern text as supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn boost(&self) -> f64 {
        self.boost
    }

    /// True if the pattern occurs anywhere in `content`.
    ///
    /// This is a search, not an anchored match. Absent content never matches.
    #[inline]
    pub fn matches(&self, content: Option<&str>) -> bool {
        content.is_some_and(|text| self.regex.is_match(text))
    }
}

/// Ordered, immutable collection of boost rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<BoostRule>,
}

impl RuleSet {
    /// Build a rule set from `(pattern, multiplier)` pairs, in iteration order.
    ///
    /// Fails on the first pattern that does not compile or the first multiplier
    /// that is not finite and positive.
    pub fn new<I, P>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, boost)| BoostRule::new(pattern, boost))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rules = rules.len(), "compiled boost rules");
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoostRule> {
        self.rules.iter()
    }

    /// Product of the multipliers of every rule matching `content`.
    ///
    /// Returns 1.0 when nothing matches.
    pub fn combined_boost(&self, content: Option<&str>) -> f64 {
        self.rules
            .iter()
            .filter(|rule| rule.matches(content))
            .map(BoostRule::boost)
            .product()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a BoostRule;
    type IntoIter = std::slice::Iter<'a, BoostRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
