//! Layered error types

use edusplit_core::CoreError;
use thiserror::Error;

/// Opaque failure reported by an external model collaborator.
///
/// The engine never constructs these itself; model implementations raise
/// them and the engine passes them through untranslated.
#[derive(Error, Debug, Clone)]
#[error("model error: {0}")]
pub struct ModelError(String);

impl ModelError {
    /// Creates a model error from any displayable cause
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core precondition violation
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// External model failure, propagated unchanged
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Batch inputs of mismatched lengths
    #[error("batch shape mismatch: {left} premises vs {right} hypotheses")]
    BatchShapeMismatch {
        /// Number of premise snippets
        left: usize,
        /// Number of hypothesis snippets
        right: usize,
    },

    /// The model returned a different number of predictions than requested
    #[error("model returned {got} predictions for {expected} inputs")]
    PredictionCountMismatch {
        /// Number of inputs sent to the model
        expected: usize,
        /// Number of predictions received
        got: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
