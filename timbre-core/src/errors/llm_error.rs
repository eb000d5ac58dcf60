/// Chat-completion transport errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("no LLM credentials configured")]
    NoCredentials,

    #[error("no model configured for credential")]
    NoModel,

    #[error("http error: {reason}")]
    Http { reason: String },

    #[error("LLM returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion: {reason}")]
    MalformedResponse { reason: String },
}
