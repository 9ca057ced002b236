// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `RegexBooster`: the pipeline stage.
//!
//! Build it once from a `pattern -> multiplier` map, then call `run` on every
//! batch the retriever produces. Each document whose content matches a pattern
//! (case-insensitively, anywhere in the text) has its score multiplied by that
//! pattern's boost; several matches compound. The batch comes back sorted by
//! score, highest first.
//!
//! ```
//! use regex_booster::{Document, RegexBooster};
//!
//! let booster = RegexBooster::new([
//!     (r"\bpython\b", 1.5),       // +50% for "python"
//!     (r"machine\s+learning", 1.3),
//!     (r"\bsql\b", 0.8),          // -20% for "sql"
//! ])?;
//!
//! let output = booster.run(vec![
//!     Document::new("SQL for analysts", 1.0),
//!     Document::new("Machine learning in Python", 1.0),
//! ]);
//!
//! assert_eq!(
//!     output.documents[0].content.as_deref(),
//!     Some("Machine learning in Python")
//! );
//! # Ok::<(), regex_booster::BoostError>(())
//! ```

use crate::config::{BoosterConfig, RegexBoosts};
use crate::document::Document;
use crate::error::Result;
use crate::pipeline::{DocumentStage, StageOutput};
use crate::scoring::{score_and_sort, RuleSet};

/// Regex-driven score booster and re-ranker.
///
/// The rule set is fixed at construction. `run` only reads it, so one booster
/// can serve any number of callers.
#[derive(Debug, Clone)]
pub struct RegexBooster {
    rules: RuleSet,
}

impl RegexBooster {
    /// Compile every pattern. Fails on the first invalid pattern or boost.
    pub fn new<I, P>(regex_boosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, f64)>,
        P: Into<String>,
    {
        Ok(Self::from_rules(RuleSet::new(regex_boosts)?))
    }

    pub fn from_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &BoosterConfig) -> Result<Self> {
        Self::new(config.regex_boosts.iter())
    }

    /// Parse and compile a JSON config in one step.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(&BoosterConfig::from_json(json)?)
    }

    /// The init parameters this booster was built from, in rule order.
    pub fn to_config(&self) -> BoosterConfig {
        BoosterConfig::new(
            self.rules
                .iter()
                .map(|rule| (rule.pattern(), rule.boost()))
                .collect::<RegexBoosts>(),
        )
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Boost and rank a batch. Takes `documents`, returns `documents`.
    pub fn run(&self, documents: Vec<Document>) -> StageOutput {
        score_and_sort(documents, &self.rules).into()
    }
}

impl DocumentStage for RegexBooster {
    fn run_stage(&self, documents: Vec<Document>) -> StageOutput {
        self.run(documents)
    }
}
