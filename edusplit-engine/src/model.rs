//! External model collaborator traits and wire types
//!
//! The neural models are injected capabilities, not ambient state: the
//! orchestrators hold a shared handle to an implementation of one of
//! these traits and never load or manage model artifacts themselves.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// A premise/hypothesis pair sent to the pairwise relation model.
///
/// Field names match the entailment-style JSON interface of the
/// underlying model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseQuery {
    /// Left span text
    pub premise: String,
    /// Right span text
    pub hypothesis: String,
}

impl PairwiseQuery {
    /// Creates a query from the two span texts
    pub fn new(premise: impl Into<String>, hypothesis: impl Into<String>) -> Self {
        Self {
            premise: premise.into(),
            hypothesis: hypothesis.into(),
        }
    }
}

/// One pairwise model answer: the selected label and the full
/// distribution over labels, keyed as `{"label": ..., "probs": [...]}`
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseResponse {
    /// Selected relation label
    pub label: String,
    /// Probability distribution over labels
    pub probs: Vec<f64>,
}

/// Sequence-labeling model that scores unit-start boundaries.
///
/// Input sentences are whitespace-joined, normalized token text; the
/// returned vectors hold per-token probabilities that the token begins a
/// new discourse unit. Implementations may pad their output; callers
/// truncate to the true token count.
pub trait BoundaryModel: Send + Sync {
    /// Scores a batch of sentences in one round trip
    fn predict_batch(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, ModelError>;
}

/// Pairwise entailment-style model for relation/nuclearity prediction.
pub trait PairwiseModel: Send + Sync {
    /// Scores a single premise/hypothesis pair
    fn predict(&self, query: &PairwiseQuery) -> Result<PairwiseResponse, ModelError>;

    /// Scores a batch of pairs in one round trip
    fn predict_batch(&self, queries: &[PairwiseQuery]) -> Result<Vec<PairwiseResponse>, ModelError>;
}
