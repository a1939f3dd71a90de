//! Deterministic core for elementary discourse unit segmentation
//!
//! This crate holds the pure, model-free half of an RST segmentation
//! pipeline: text normalization, boundary decoding under structural
//! constraints, and discourse unit construction with exact source spans.
//! The neural collaborators live behind traits in `edusplit-engine`;
//! nothing here performs I/O or holds state across calls.

#![warn(missing_docs)]

pub mod build;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod types;

pub use build::build_units;
pub use decode::{decode_document, decode_sentence, DEFAULT_THRESHOLD};
pub use error::{CoreError, Result};
pub use normalize::{normalize_sequence, normalize_token, HTML_MARKER};
pub use types::{BoundaryVec, DiscourseUnit, Nuclearity, Sentence, Token, ELEMENTARY};
