use timbre_core::errors::ClassifierError;
use timbre_core::traits::IStanceClassifier;
use timbre_core::TimbreResult;

/// Returns the label of the first rule whose keyword appears in the
/// lower-cased text, or the default label.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<(String, String)>,
    default_label: String,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default_label: "neutral".to_string(),
        }
    }

    /// A classifier that answers `label` for every text.
    pub fn always(label: &str) -> Self {
        Self::new().with_default(label)
    }

    pub fn rule(mut self, keyword: &str, label: &str) -> Self {
        self.rules.push((keyword.to_lowercase(), label.to_string()));
        self
    }

    pub fn with_default(mut self, label: &str) -> Self {
        self.default_label = label.to_string();
        self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IStanceClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> TimbreResult<String> {
        let lower = text.to_lowercase();
        let label = self
            .rules
            .iter()
            .find(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| self.default_label.clone());
        Ok(label)
    }
}

/// Always fails, as an unreachable model would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingClassifier;

impl IStanceClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> TimbreResult<String> {
        Err(ClassifierError::Unavailable {
            reason: "classifier offline".to_string(),
        }
        .into())
    }
}
