//! Core error types

use thiserror::Error;

/// Errors raised by the pure segmentation core.
///
/// These are precondition violations in the annotation input; degenerate
/// model inputs are handled by fallback values upstream and never reach
/// this layer as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A boundary index does not reference a token of the document
    #[error("boundary index {index} out of range for {token_count} tokens")]
    BoundaryIndexOutOfRange {
        /// The offending boundary token index
        index: usize,
        /// Number of tokens in the document
        token_count: usize,
    },

    /// A sentence's token range does not fit the document's token sequence
    #[error("sentence range [{begin}, {end}) out of range for {token_count} tokens")]
    SentenceOutOfRange {
        /// First token index of the sentence
        begin: usize,
        /// One past the last token index of the sentence
        end: usize,
        /// Number of tokens in the document
        token_count: usize,
    },

    /// A token span does not address a valid substring of the source text
    #[error("span [{start}, {end}) out of range for text of {text_len} bytes")]
    SpanOutOfRange {
        /// Start byte offset of the span
        start: usize,
        /// End byte offset of the span
        end: usize,
        /// Length of the source text in bytes
        text_len: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
