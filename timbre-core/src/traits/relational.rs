use crate::errors::TimbreResult;
use crate::models::{Interaction, RelationalDelta};

/// Narrow read/write interface onto an external relational-state model.
pub trait IRelationalModel: Send + Sync {
    /// Interaction held by `agent_id` toward `other_id`.
    fn get_interaction(&self, agent_id: &str, other_id: &str) -> TimbreResult<Interaction>;

    /// Apply `delta` to the interaction held by `from_id` toward `to_id`.
    fn update_interaction_state(
        &self,
        from_id: &str,
        to_id: &str,
        delta: &RelationalDelta,
    ) -> TimbreResult<Interaction>;
}
