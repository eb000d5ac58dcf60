use crate::errors::{ClassifierError, TimbreResult};

/// Interpersonal stance classification of one utterance.
///
/// Implementations return the raw label; normalization into a
/// [`StanceBand`](crate::StanceBand) happens in the learning crate.
#[allow(async_fn_in_trait)]
pub trait IStanceClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> TimbreResult<String>;
}

/// Classifier used when none is configured. Always unavailable, so every
/// utterance lands in the neutral band.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpClassifier;

impl IStanceClassifier for NoOpClassifier {
    async fn classify(&self, _text: &str) -> TimbreResult<String> {
        Err(ClassifierError::Unavailable {
            reason: "no classifier configured".to_string(),
        }
        .into())
    }
}
