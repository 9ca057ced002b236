// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable booster configuration.
//!
//! A pipeline definition stores each stage's init parameters as JSON. For the
//! booster that is a single `regex_boosts` object mapping pattern to multiplier:
//!
//! ```json
//! {
//!   "regex_boosts": {
//!     "\\bpython\\b": 1.5,
//!     "machine\\s+learning": 1.3,
//!     "\\bsql\\b": 0.8
//!   }
//! }
//! ```
//!
//! JSON objects are unordered in general, but rule order is observable in the
//! floating-point result, so `RegexBoosts` keeps the entries in the order they
//! appear in the document and writes them back in that order.

use crate::error::Result;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered `pattern -> multiplier` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegexBoosts(Vec<(String, f64)>);

impl RegexBoosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicate patterns are kept as separate entries.
    pub fn push(&mut self, pattern: impl Into<String>, boost: f64) {
        self.0.push((pattern.into(), boost));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(pattern, boost)| (pattern.as_str(), *boost))
    }
}

impl<P: Into<String>> FromIterator<(P, f64)> for RegexBoosts {
    fn from_iter<I: IntoIterator<Item = (P, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(pattern, boost)| (pattern.into(), boost))
                .collect(),
        )
    }
}

impl IntoIterator for RegexBoosts {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for RegexBoosts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pattern, boost) in &self.0 {
            map.serialize_entry(pattern, boost)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RegexBoosts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BoostsVisitor;

        impl<'de> Visitor<'de> for BoostsVisitor {
            type Value = RegexBoosts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of regex pattern to boost multiplier")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((pattern, boost)) = access.next_entry::<String, f64>()? {
                    entries.push((pattern, boost));
                }
                Ok(RegexBoosts(entries))
            }
        }

        deserializer.deserialize_map(BoostsVisitor)
    }
}

/// Init parameters of a `RegexBooster`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoosterConfig {
    pub regex_boosts: RegexBoosts,
}

impl BoosterConfig {
    pub fn new(regex_boosts: RegexBoosts) -> Self {
        Self { regex_boosts }
    }

    /// Parse a config from JSON. Patterns are not compiled here.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
