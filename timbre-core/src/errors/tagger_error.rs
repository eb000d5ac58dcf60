/// Part-of-speech tagger errors.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("tagger unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("tagger returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}
