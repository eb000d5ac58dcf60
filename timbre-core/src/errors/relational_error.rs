/// Errors raised by a relational model implementation.
#[derive(Debug, thiserror::Error)]
pub enum RelationalError {
    #[error("interaction not found: {from_id} -> {to_id}")]
    InteractionNotFound { from_id: String, to_id: String },

    #[error("relational update failed: {reason}")]
    UpdateFailed { reason: String },
}
