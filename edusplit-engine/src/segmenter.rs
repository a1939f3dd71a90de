//! Document segmentation orchestrator
//!
//! Composes normalization, the external boundary model, boundary decoding
//! and unit construction into one call per document.

use crate::config::SegmenterConfig;
use crate::error::{EngineError, Result};
use crate::model::BoundaryModel;
use edusplit_core::{
    build_units, decode_sentence, normalize_token, CoreError, DiscourseUnit, Sentence, Token,
};
use std::sync::Arc;

/// Splits an annotated document into elementary discourse units.
///
/// The boundary model is an injected collaborator; the segmenter itself
/// holds no mutable state and a single instance is safe to share across
/// threads.
pub struct Segmenter {
    model: Arc<dyn BoundaryModel>,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Creates a segmenter with the default threshold
    pub fn new(model: Arc<dyn BoundaryModel>) -> Self {
        Self::with_config(model, SegmenterConfig::default())
    }

    /// Creates a segmenter with a custom configuration
    pub fn with_config(model: Arc<dyn BoundaryModel>, config: SegmenterConfig) -> Self {
        Self { model, config }
    }

    /// Current configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segments one document into discourse units.
    ///
    /// `tokens` and `sentences` come from the upstream annotation
    /// pipeline and are read-only; `start_id` offsets the ids of the
    /// produced units. A document that decodes to zero boundaries yields
    /// an empty sequence rather than an error.
    pub fn segment(
        &self,
        text: &str,
        tokens: &[Token],
        sentences: &[Sentence],
        start_id: usize,
    ) -> Result<Vec<DiscourseUnit>> {
        // Normalized sentence strings for the model; sentences that
        // normalize to nothing are not sent.
        let mut kept: Vec<&Sentence> = Vec::with_capacity(sentences.len());
        let mut inputs: Vec<String> = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let range = tokens.get(sentence.begin..sentence.end).ok_or(
                CoreError::SentenceOutOfRange {
                    begin: sentence.begin,
                    end: sentence.end,
                    token_count: tokens.len(),
                },
            )?;
            let joined = range
                .iter()
                .map(|token| normalize_token(&token.text))
                .collect::<Vec<_>>()
                .join(" ");
            let joined = joined.trim();
            if joined.is_empty() {
                continue;
            }
            kept.push(sentence);
            inputs.push(joined.to_string());
        }

        log::debug!(
            "sending {} of {} sentences to the boundary model",
            inputs.len(),
            sentences.len()
        );

        let mut numbers = Vec::new();
        if !inputs.is_empty() {
            let predictions = self.model.predict_batch(&inputs)?;
            if predictions.len() != kept.len() {
                return Err(EngineError::PredictionCountMismatch {
                    expected: kept.len(),
                    got: predictions.len(),
                });
            }

            for (sentence, probs) in kept.iter().zip(&predictions) {
                // Models may pad; only the sentence's true token count is
                // meaningful.
                let token_count = sentence.len().min(probs.len());
                let flags = decode_sentence(&probs[..token_count], self.config.threshold);
                numbers.extend(
                    flags
                        .iter()
                        .enumerate()
                        .filter(|(_, &on)| on)
                        .map(|(j, _)| sentence.begin + j),
                );
            }
        }

        if numbers.is_empty() && !tokens.is_empty() {
            log::warn!("document decoded to zero unit boundaries");
        }

        Ok(build_units(text, tokens, &numbers, start_id)?)
    }
}
