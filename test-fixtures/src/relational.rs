use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use timbre_core::errors::RelationalError;
use timbre_core::models::{Interaction, InteractionState, RelationalDelta};
use timbre_core::traits::IRelationalModel;
use timbre_core::{RelationalStance, TimbreResult};

/// One call to `update_interaction_state`, as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpdate {
    pub from_id: String,
    pub to_id: String,
    pub delta: RelationalDelta,
}

/// In-memory relational model. Unknown pairs start at the default stance
/// (collaborative) with every axis at 0.5.
#[derive(Debug)]
pub struct FakeRelational {
    default_stance: RelationalStance,
    interactions: Mutex<HashMap<(String, String), Interaction>>,
    updates: Mutex<Vec<RecordedUpdate>>,
}

impl FakeRelational {
    pub fn new() -> Self {
        Self::with_default_stance(RelationalStance::Collaborative)
    }

    pub fn with_default_stance(default_stance: RelationalStance) -> Self {
        Self {
            default_stance,
            interactions: Mutex::new(HashMap::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Pin the stance `agent_id` holds toward `other_id`.
    pub fn set_stance(&self, agent_id: &str, other_id: &str, stance: RelationalStance) {
        let mut map = self.interactions.lock().unwrap_or_else(PoisonError::into_inner);
        let interaction = map
            .entry((agent_id.to_string(), other_id.to_string()))
            .or_insert_with(|| self.fresh(agent_id, other_id));
        interaction.state.stance = stance;
    }

    /// Every update received so far, in call order.
    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn interaction(&self, from_id: &str, to_id: &str) -> Option<Interaction> {
        self.interactions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(from_id.to_string(), to_id.to_string()))
            .cloned()
    }

    fn fresh(&self, from_id: &str, to_id: &str) -> Interaction {
        Interaction {
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            state: InteractionState {
                stance: self.default_stance.clone(),
                trust: 0.5,
                comfort: 0.5,
                alignment: 0.5,
                energy: 0.5,
            },
        }
    }
}

impl Default for FakeRelational {
    fn default() -> Self {
        Self::new()
    }
}

impl IRelationalModel for FakeRelational {
    fn get_interaction(&self, agent_id: &str, other_id: &str) -> TimbreResult<Interaction> {
        Ok(self
            .interaction(agent_id, other_id)
            .unwrap_or_else(|| self.fresh(agent_id, other_id)))
    }

    fn update_interaction_state(
        &self,
        from_id: &str,
        to_id: &str,
        delta: &RelationalDelta,
    ) -> TimbreResult<Interaction> {
        let updated = {
            let mut map = self.interactions.lock().unwrap_or_else(PoisonError::into_inner);
            let interaction = map
                .entry((from_id.to_string(), to_id.to_string()))
                .or_insert_with(|| self.fresh(from_id, to_id));
            interaction.state.apply(delta);
            interaction.clone()
        };
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedUpdate {
                from_id: from_id.to_string(),
                to_id: to_id.to_string(),
                delta: *delta,
            });
        Ok(updated)
    }
}

/// Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRelational;

impl IRelationalModel for FailingRelational {
    fn get_interaction(&self, agent_id: &str, other_id: &str) -> TimbreResult<Interaction> {
        Err(RelationalError::InteractionNotFound {
            from_id: agent_id.to_string(),
            to_id: other_id.to_string(),
        }
        .into())
    }

    fn update_interaction_state(
        &self,
        _from_id: &str,
        _to_id: &str,
        _delta: &RelationalDelta,
    ) -> TimbreResult<Interaction> {
        Err(RelationalError::UpdateFailed {
            reason: "relational store offline".to_string(),
        }
        .into())
    }
}
