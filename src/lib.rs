//! Regex-driven score boosting for document retrieval pipelines.
//!
//! This crate provides a single pipeline stage, `RegexBooster`, that sits between
//! a retriever and whatever consumes its ranked output. Each document whose
//! content matches one of the configured patterns has its score multiplied by
//! that pattern's boost, and the batch is returned sorted by score, highest first.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  config.rs   │────▶│ scoring/     │────▶│ scoring/         │
//! │ (BoosterCon- │     │  rules.rs    │     │  ranking.rs      │
//! │  fig, JSON)  │     │ (RuleSet)    │     │ (score_and_sort) │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!                              │                     │
//!                              ▼                     ▼
//!                      ┌─────────────────────────────────────┐
//!                      │  booster.rs (RegexBooster)          │
//!                      │  pipeline.rs (DocumentStage,        │
//!                      │   "documents" in, "documents" out)  │
//!                      └─────────────────────────────────────┘
//! ```
//!
//! # Semantics
//!
//! | Input                          | Result                                   |
//! |--------------------------------|------------------------------------------|
//! | score `s`, rules `R` match     | `s × Π boost(r) for r in R`              |
//! | score `s`, nothing matches     | `s`, unchanged                           |
//! | no score                       | stays `None`, ranks as 0                 |
//! | no content                     | matches nothing                          |
//! | equal effective scores         | input order kept                         |
//!
//! Matching is case-insensitive and unanchored. Invalid patterns and
//! non-positive boosts are rejected when the booster is built, never at run time.
//!
//! # Usage
//!
//! ```
//! use regex_booster::{Document, RegexBooster};
//!
//! let booster = RegexBooster::new([(r"\bPython\b", 1.5), (r"\bJava\b", 1.2)])?;
//! let ranked = booster.run(vec![
//!     Document::new("Java is okay", 1.0),
//!     Document::new("Python is great", 1.0),
//!     Document::new("C++ is fast", 1.0),
//! ]);
//!
//! let order: Vec<_> = ranked
//!     .documents
//!     .iter()
//!     .map(|doc| doc.content.as_deref().unwrap_or(""))
//!     .collect();
//! assert_eq!(order, ["Python is great", "Java is okay", "C++ is fast"]);
//! # Ok::<(), regex_booster::BoostError>(())
//! ```

// Module declarations
mod booster;
pub mod config;
pub mod contracts;
mod document;
mod error;
pub mod pipeline;
pub mod scoring;
pub mod testing;

// Re-exports for public API
pub use booster::RegexBooster;
pub use config::{BoosterConfig, RegexBoosts};
pub use document::{compare_by_score, Document};
pub use error::{BoostError, Result};
pub use pipeline::{DocumentStage, StageOutput, DOCUMENTS_PORT};
pub use scoring::{apply_boosts, rank, score_and_sort, BoostRule, BoostStats, RuleSet};
