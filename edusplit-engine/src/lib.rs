//! Model orchestration for elementary discourse unit segmentation
//!
//! Composes the pure core (`edusplit-core`) with two external neural
//! collaborators: a per-token boundary model for segmentation and a
//! pairwise entailment-style model for relation/nuclearity prediction.
//! Both collaborators are injected behind traits; this crate adds the
//! normalization, decoding, and batch-guarding glue around them and
//! nothing else.

#![warn(missing_docs)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod model;
pub mod segmenter;

pub use classifier::{PairwiseClassifier, Prediction, FALLBACK_PROBS};
pub use config::{ClassifierConfig, SegmenterConfig, DEFAULT_MAX_LEN};
pub use error::{EngineError, ModelError, Result};
pub use model::{BoundaryModel, PairwiseModel, PairwiseQuery, PairwiseResponse};
pub use segmenter::Segmenter;

// Re-export the annotation and output types callers need to drive the
// orchestrators.
pub use edusplit_core::{DiscourseUnit, Nuclearity, Sentence, Token};
