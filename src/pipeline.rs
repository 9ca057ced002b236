// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract between a stage and the pipeline that wires it up.
//!
//! The orchestrator lives elsewhere. What it needs from a stage is a set of
//! named input ports, a set of named output ports, and a way to run. Stages are
//! connected by matching an output port name on one stage to an input port name
//! on the next, so document-in/document-out stages all use `documents` on both
//! sides.

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Port name for a list of documents, on both the input and output side.
pub const DOCUMENTS_PORT: &str = "documents";

/// Named output of a document stage. Serializes as `{"documents": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageOutput {
    pub documents: Vec<Document>,
}

impl StageOutput {
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl From<Vec<Document>> for StageOutput {
    fn from(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

/// A pipeline stage that takes documents and returns documents.
pub trait DocumentStage {
    /// Input port names. Document stages take `documents`.
    fn input_ports(&self) -> &'static [&'static str] {
        &[DOCUMENTS_PORT]
    }

    /// Output port names. Document stages produce `documents`.
    fn output_ports(&self) -> &'static [&'static str] {
        &[DOCUMENTS_PORT]
    }

    fn run_stage(&self, documents: Vec<Document>) -> StageOutput;
}

/// Whether `upstream`'s outputs can feed `downstream`'s inputs by port name.
pub fn can_connect(upstream: &dyn DocumentStage, downstream: &dyn DocumentStage) -> bool {
    downstream
        .input_ports()
        .iter()
        .all(|port| upstream.output_ports().contains(port))
}
