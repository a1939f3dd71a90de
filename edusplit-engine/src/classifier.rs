//! Guarded pairwise relation classification
//!
//! Wraps the external pairwise model so that empty or over-length
//! snippets never abort a call: single queries short-circuit to a fixed
//! fallback, batch queries substitute a dummy pair for the offending
//! index and keep going.

use crate::config::ClassifierConfig;
use crate::error::{EngineError, Result};
use crate::model::{PairwiseModel, PairwiseQuery};
use edusplit_core::normalize_sequence;
use std::sync::Arc;

/// Fallback distribution returned for degenerate inputs.
pub const FALLBACK_PROBS: [f64; 2] = [1.0, 0.0];

/// Dummy premise substituted for degenerate batch items.
const DUMMY_PREMISE: &str = "1";
/// Dummy hypothesis substituted for degenerate batch items.
const DUMMY_HYPOTHESIS: &str = "-";

/// Result of a single-pair label query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prediction {
    /// The model's selected relation label
    Label(String),
    /// Degenerate input; no model call was made and no label is
    /// meaningful. The associated distribution is [`FALLBACK_PROBS`].
    NoConfidentLabel,
}

impl Prediction {
    /// The label, if the model produced one
    pub fn label(&self) -> Option<&str> {
        match self {
            Prediction::Label(label) => Some(label),
            Prediction::NoConfidentLabel => None,
        }
    }
}

/// Relation/nuclearity classifier over pairs of text spans.
///
/// Holds a shared handle to the external pairwise model; all length and
/// emptiness guards live here, everything past them is the model's
/// business. Model failures propagate unchanged.
pub struct PairwiseClassifier {
    model: Arc<dyn PairwiseModel>,
    config: ClassifierConfig,
}

impl PairwiseClassifier {
    /// Creates a classifier with the default snippet length limit
    pub fn new(model: Arc<dyn PairwiseModel>) -> Self {
        Self::with_config(model, ClassifierConfig::default())
    }

    /// Creates a classifier with a custom configuration
    pub fn with_config(model: Arc<dyn PairwiseModel>, config: ClassifierConfig) -> Self {
        Self { model, config }
    }

    /// Current configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// True when a snippet must not reach the model: zero whitespace
    /// tokens, or more than the configured maximum.
    fn is_degenerate(&self, snippet: &str) -> bool {
        let token_count = snippet.split_whitespace().count();
        token_count == 0 || token_count > self.config.max_len
    }

    /// Probability distribution over relation labels for one pair.
    ///
    /// Degenerate input yields [`FALLBACK_PROBS`] without a model call.
    pub fn predict_proba(&self, snippet_x: &str, snippet_y: &str) -> Result<Vec<f64>> {
        if self.is_degenerate(snippet_x) || self.is_degenerate(snippet_y) {
            return Ok(FALLBACK_PROBS.to_vec());
        }

        let query = PairwiseQuery::new(normalize_sequence(snippet_x), normalize_sequence(snippet_y));
        Ok(self.model.predict(&query)?.probs)
    }

    /// Top relation label for one pair.
    ///
    /// Degenerate input yields [`Prediction::NoConfidentLabel`] without a
    /// model call.
    pub fn predict(&self, snippet_x: &str, snippet_y: &str) -> Result<Prediction> {
        if self.is_degenerate(snippet_x) || self.is_degenerate(snippet_y) {
            return Ok(Prediction::NoConfidentLabel);
        }

        let query = PairwiseQuery::new(normalize_sequence(snippet_x), normalize_sequence(snippet_y));
        Ok(Prediction::Label(self.model.predict(&query)?.label))
    }

    /// Probability distributions for a batch of pairs, one model round
    /// trip.
    ///
    /// Degenerate items are sent as a fixed dummy pair so the batch never
    /// fails; their returned distribution is the model's actual answer on
    /// the dummy pair and carries no meaning for the original input.
    pub fn predict_proba_batch(
        &self,
        snippets_x: &[&str],
        snippets_y: &[&str],
    ) -> Result<Vec<Vec<f64>>> {
        let queries = self.build_batch(snippets_x, snippets_y)?;
        let responses = self.model.predict_batch(&queries)?;
        if responses.len() != queries.len() {
            return Err(EngineError::PredictionCountMismatch {
                expected: queries.len(),
                got: responses.len(),
            });
        }
        Ok(responses.into_iter().map(|r| r.probs).collect())
    }

    /// Top labels for a batch of pairs, one model round trip.
    ///
    /// Dummy substitution as in [`Self::predict_proba_batch`]; a
    /// dummy-substituted index carries the model's label for the dummy
    /// pair.
    pub fn predict_batch(&self, snippets_x: &[&str], snippets_y: &[&str]) -> Result<Vec<String>> {
        let queries = self.build_batch(snippets_x, snippets_y)?;
        let responses = self.model.predict_batch(&queries)?;
        if responses.len() != queries.len() {
            return Err(EngineError::PredictionCountMismatch {
                expected: queries.len(),
                got: responses.len(),
            });
        }
        Ok(responses.into_iter().map(|r| r.label).collect())
    }

    /// Normalizes valid pairs and substitutes the dummy pair for
    /// degenerate ones, index by index.
    fn build_batch(
        &self,
        snippets_x: &[&str],
        snippets_y: &[&str],
    ) -> Result<Vec<PairwiseQuery>> {
        if snippets_x.len() != snippets_y.len() {
            return Err(EngineError::BatchShapeMismatch {
                left: snippets_x.len(),
                right: snippets_y.len(),
            });
        }

        let queries = snippets_x
            .iter()
            .zip(snippets_y)
            .enumerate()
            .map(|(i, (&x, &y))| {
                if self.is_degenerate(x) || self.is_degenerate(y) {
                    log::debug!("substituting dummy pair for degenerate batch item {i}");
                    PairwiseQuery::new(DUMMY_PREMISE, DUMMY_HYPOTHESIS)
                } else {
                    PairwiseQuery::new(normalize_sequence(x), normalize_sequence(y))
                }
            })
            .collect();
        Ok(queries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::model::PairwiseResponse;
    use std::sync::Mutex;

    /// Pairwise model stub answering every query with a fixed response
    /// and recording what it was asked.
    struct MockPairwiseModel {
        response: PairwiseResponse,
        received: Mutex<Vec<PairwiseQuery>>,
    }

    impl MockPairwiseModel {
        fn new() -> Self {
            Self {
                response: PairwiseResponse {
                    label: "joint".to_string(),
                    probs: vec![0.7, 0.3],
                },
                received: Mutex::new(Vec::new()),
            }
        }
    }

    impl PairwiseModel for MockPairwiseModel {
        fn predict(
            &self,
            query: &PairwiseQuery,
        ) -> std::result::Result<PairwiseResponse, ModelError> {
            self.received.lock().unwrap().push(query.clone());
            Ok(self.response.clone())
        }

        fn predict_batch(
            &self,
            queries: &[PairwiseQuery],
        ) -> std::result::Result<Vec<PairwiseResponse>, ModelError> {
            self.received.lock().unwrap().extend(queries.iter().cloned());
            Ok(vec![self.response.clone(); queries.len()])
        }
    }

    fn long_snippet(tokens: usize) -> String {
        vec!["w"; tokens].join(" ")
    }

    #[test]
    fn test_predict_proba_valid_pair() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model.clone());

        let probs = classifier.predict_proba("hello world", "foo bar").unwrap();
        assert_eq!(probs, vec![0.7, 0.3]);
        assert_eq!(model.received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_snippet_takes_fallback_without_model_call() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model.clone());

        assert_eq!(
            classifier.predict_proba("", "foo").unwrap(),
            FALLBACK_PROBS.to_vec()
        );
        assert_eq!(
            classifier.predict_proba("foo", "   ").unwrap(),
            FALLBACK_PROBS.to_vec()
        );
        assert!(model.received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_over_length_snippet_takes_fallback() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model.clone());

        let over = long_snippet(251);
        assert_eq!(
            classifier.predict_proba(&over, "foo").unwrap(),
            FALLBACK_PROBS.to_vec()
        );
        // Exactly at the limit is still valid
        let at_limit = long_snippet(250);
        classifier.predict_proba(&at_limit, "foo").unwrap();
        assert_eq!(model.received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_predict_returns_sentinel_for_degenerate_input() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model);

        assert_eq!(
            classifier.predict("", "foo").unwrap(),
            Prediction::NoConfidentLabel
        );
        assert_eq!(Prediction::NoConfidentLabel.label(), None);
    }

    #[test]
    fn test_predict_returns_model_label() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model);

        let prediction = classifier.predict("hello", "world").unwrap();
        assert_eq!(prediction, Prediction::Label("joint".to_string()));
        assert_eq!(prediction.label(), Some("joint"));
    }

    #[test]
    fn test_batch_substitutes_dummy_pair() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model.clone());

        let labels = classifier
            .predict_batch(&["hello world", ""], &["foo", "bar"])
            .unwrap();
        assert_eq!(labels.len(), 2);

        let received = model.received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0], PairwiseQuery::new("hello world", "foo"));
        assert_eq!(received[1], PairwiseQuery::new("1", "-"));
    }

    #[test]
    fn test_batch_normalizes_valid_items() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model.clone());

        classifier
            .predict_proba_batch(&["see  www.a.b"], &["ok"])
            .unwrap();
        let received = model.received.lock().unwrap();
        assert_eq!(received[0], PairwiseQuery::new("see _html_", "ok"));
    }

    #[test]
    fn test_batch_shape_mismatch_fails_fast() {
        let model = Arc::new(MockPairwiseModel::new());
        let classifier = PairwiseClassifier::new(model);

        let err = classifier.predict_batch(&["a", "b"], &["c"]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::BatchShapeMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_model_failure_propagates() {
        struct FailingModel;
        impl PairwiseModel for FailingModel {
            fn predict(
                &self,
                _: &PairwiseQuery,
            ) -> std::result::Result<PairwiseResponse, ModelError> {
                Err(ModelError::new("model unavailable"))
            }
            fn predict_batch(
                &self,
                _: &[PairwiseQuery],
            ) -> std::result::Result<Vec<PairwiseResponse>, ModelError> {
                Err(ModelError::new("model unavailable"))
            }
        }

        let classifier = PairwiseClassifier::new(Arc::new(FailingModel));
        assert!(classifier.predict("a", "b").is_err());
        assert!(classifier.predict_batch(&["a"], &["b"]).is_err());
    }
}
