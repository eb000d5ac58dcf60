mod classifier_error;
mod llm_error;
mod relational_error;
mod tagger_error;

pub use classifier_error::ClassifierError;
pub use llm_error::LlmError;
pub use relational_error::RelationalError;
pub use tagger_error::TaggerError;

/// Top-level error for the Timbre voice engine.
#[derive(Debug, thiserror::Error)]
pub enum TimbreError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Tagger(#[from] TaggerError),

    #[error(transparent)]
    Relational(#[from] RelationalError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type TimbreResult<T> = Result<T, TimbreError>;
