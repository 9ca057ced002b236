// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how boosted documents get their numbers and their order.
//!
//! `rules` owns the compiled patterns. `ranking` applies them to a batch and
//! sorts the result. A document's final score is its original score times the
//! product of every matching rule's multiplier; unscored documents are left
//! alone and rank as if they scored 0.

pub mod ranking;
mod rules;

pub use ranking::{apply_boosts, rank, score_and_sort, BoostStats};
pub use rules::{BoostRule, RuleSet};
