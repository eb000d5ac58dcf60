//! Completion-backed stance classifier.

use std::sync::Arc;

use timbre_core::errors::ClassifierError;
use timbre_core::traits::IStanceClassifier;
use timbre_core::TimbreResult;

use crate::backend::LlmBackend;
use crate::client::ChatRequest;
use crate::prompts::STANCE_PROMPT;

/// Asks the model for a single stance word. The raw answer is returned
/// lower-cased; mapping onto a band is the normalizer's job.
#[derive(Debug, Clone)]
pub struct LlmStanceClassifier {
    backend: Arc<LlmBackend>,
}

impl LlmStanceClassifier {
    pub fn new(backend: Arc<LlmBackend>) -> Self {
        Self { backend }
    }
}

impl IStanceClassifier for LlmStanceClassifier {
    async fn classify(&self, text: &str) -> TimbreResult<String> {
        let request = ChatRequest {
            system: STANCE_PROMPT,
            user: text,
            max_tokens: self.backend.stance_max_tokens(),
            json: false,
        };
        let label = self.backend.complete(&request).await?;
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Err(ClassifierError::EmptyResponse.into());
        }
        Ok(label)
    }
}
