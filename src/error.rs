// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time errors.
//!
//! Everything that can go wrong goes wrong before the first document is scored.
//! A booster that exists is a booster that cannot fail: absent scores and absent
//! content are valid inputs with defined behavior, not errors.

use thiserror::Error;

/// Error raised while building a rule set or loading a booster config.
#[derive(Debug, Error)]
pub enum BoostError {
    /// A pattern failed to compile.
    #[error("invalid boost pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// A multiplier was zero, negative, NaN, or infinite.
    #[error("invalid boost {boost} for pattern '{pattern}': multiplier must be finite and > 0")]
    InvalidBoost { pattern: String, boost: f64 },
    /// The booster config could not be parsed or written.
    #[error("invalid booster config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoostError>;
