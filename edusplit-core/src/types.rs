//! Type definitions for discourse segmentation
//!
//! Annotation inputs (`Token`, `Sentence`) are produced by an upstream
//! pipeline and are read-only here. `DiscourseUnit` is the record this
//! crate produces.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Relation label assigned to every unit at construction time.
///
/// Relation labeling proper happens downstream; freshly segmented units
/// are always elementary.
pub const ELEMENTARY: &str = "elementary";

/// Per-sentence boundary vector, one flag per token.
///
/// Most sentences are short, so inline storage avoids a heap allocation
/// per sentence.
pub type BoundaryVec = SmallVec<[bool; 16]>;

/// A token of the source text with its byte span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Byte offset of the first byte of the token in the source text
    pub begin: usize,
    /// Byte offset one past the last byte of the token
    pub end: usize,
    /// Surface form of the token
    pub text: String,
}

impl Token {
    /// Creates a new token
    pub fn new(begin: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            text: text.into(),
        }
    }
}

/// A sentence, delimited as a half-open range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Index of the first token of the sentence
    pub begin: usize,
    /// Index one past the last token of the sentence
    pub end: usize,
}

impl Sentence {
    /// Creates a new sentence over the token range `[begin, end)`
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of tokens in the sentence
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// True when the sentence spans no tokens
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }
}

/// Nuclearity of a discourse unit relative to its sibling.
///
/// Segmentation never assigns nuclearity; units leave this crate with
/// [`Nuclearity::Unset`], which serializes as the `"_"` placeholder the
/// downstream tree builder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Nuclearity {
    /// Not yet assigned
    #[default]
    #[serde(rename = "_")]
    Unset,
    /// Nucleus of the relation
    #[serde(rename = "N")]
    Nucleus,
    /// Satellite of the relation
    #[serde(rename = "S")]
    Satellite,
}

/// An elementary discourse unit with its exact span in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscourseUnit {
    /// Sequential id, strictly increasing in document order
    pub id: usize,
    /// Byte offset of the unit's first character
    pub start: usize,
    /// Byte offset of the unit's last character (inclusive-end convention:
    /// the unit's text runs one byte past this, see [`crate::build`])
    pub end: usize,
    /// Exact substring of the source text covered by the unit
    pub text: String,
    /// Relation label, always [`ELEMENTARY`] at construction
    pub relation: String,
    /// Nuclearity placeholder
    pub nuclearity: Nuclearity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_len() {
        assert_eq!(Sentence::new(3, 7).len(), 4);
        assert!(Sentence::new(5, 5).is_empty());
        assert_eq!(Sentence::new(5, 5).len(), 0);
    }

    #[test]
    fn test_nuclearity_placeholder_wire_form() {
        let unit = DiscourseUnit {
            id: 0,
            start: 0,
            end: 4,
            text: "text".to_string(),
            relation: ELEMENTARY.to_string(),
            nuclearity: Nuclearity::Unset,
        };
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["nuclearity"], "_");
        assert_eq!(json["relation"], "elementary");
    }
}
