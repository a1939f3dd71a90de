//! Orchestrator configuration

use edusplit_core::DEFAULT_THRESHOLD;

/// Maximum pairwise snippet length, in whitespace-delimited tokens.
pub const DEFAULT_MAX_LEN: usize = 250;

/// Configuration for [`crate::Segmenter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmenterConfig {
    /// Probability threshold above which a token starts a new unit
    pub threshold: f32,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl SegmenterConfig {
    /// Creates a configuration with a custom threshold
    pub fn with_threshold(threshold: f32) -> Self {
        Self { threshold }
    }
}

/// Configuration for [`crate::PairwiseClassifier`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Maximum snippet length in whitespace-delimited tokens; longer or
    /// empty snippets take the fallback path instead of the model
    pub max_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl ClassifierConfig {
    /// Creates a configuration with a custom snippet length limit
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SegmenterConfig::default().threshold, 0.35);
        assert_eq!(ClassifierConfig::default().max_len, 250);
    }
}
