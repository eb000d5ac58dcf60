/// Stance classifier errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("classifier returned an empty label")]
    EmptyResponse,
}
