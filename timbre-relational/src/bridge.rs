//! RelationalBridge: the only path between the voice engine and the
//! relational-state model.

use std::sync::Arc;

use timbre_core::models::{Direction, Interaction, RelationalDelta};
use timbre_core::traits::IRelationalModel;
use timbre_core::StanceBand;
use tracing::{debug, warn};

use crate::delta::{scale_delta, stance_to_delta};

/// Optional handle onto a relational model. Without one, nudges are no-ops
/// and every inferred band is neutral.
#[derive(Clone, Default)]
pub struct RelationalBridge {
    model: Option<Arc<dyn IRelationalModel>>,
}

impl RelationalBridge {
    pub fn with_model(model: Arc<dyn IRelationalModel>) -> Self {
        Self { model: Some(model) }
    }

    pub fn is_connected(&self) -> bool {
        self.model.is_some()
    }

    /// Apply `delta` routed by `direction`. Incoming utterances update the
    /// receiver's view of the speaker (`target → speaker`); outgoing ones
    /// update `speaker → target`. Failures are logged and swallowed.
    pub fn apply(
        &self,
        direction: Direction,
        speaker_id: &str,
        target_id: &str,
        delta: &RelationalDelta,
    ) -> Option<Interaction> {
        let model = self.model.as_ref()?;
        let (from_id, to_id) = match direction {
            Direction::Incoming => (target_id, speaker_id),
            Direction::Outgoing => (speaker_id, target_id),
        };
        match model.update_interaction_state(from_id, to_id, delta) {
            Ok(interaction) => {
                debug!(from_id, to_id, ?direction, "relational state nudged");
                Some(interaction)
            }
            Err(e) => {
                warn!(from_id, to_id, error = %e, "relational update failed, ignoring");
                None
            }
        }
    }

    /// Stance → delta → score scaling → routed update.
    pub fn nudge(
        &self,
        band: StanceBand,
        direction: Direction,
        speaker_id: &str,
        target_id: &str,
        score: Option<f64>,
    ) -> Option<Interaction> {
        let delta = scale_delta(stance_to_delta(band), score);
        self.apply(direction, speaker_id, target_id, &delta)
    }

    /// Band for generating from `agent_id` toward `target_id`. Missing or
    /// empty ids, a disconnected bridge, and read failures all give neutral.
    pub fn infer_band(&self, agent_id: Option<&str>, target_id: Option<&str>) -> StanceBand {
        let (Some(model), Some(agent_id), Some(target_id)) = (self.model.as_ref(), agent_id, target_id)
        else {
            return StanceBand::Neutral;
        };
        if agent_id.is_empty() || target_id.is_empty() {
            return StanceBand::Neutral;
        }
        match model.get_interaction(agent_id, target_id) {
            Ok(interaction) => interaction.state.stance.band(),
            Err(e) => {
                warn!(agent_id, target_id, error = %e, "relational read failed, using neutral");
                StanceBand::Neutral
            }
        }
    }
}

impl std::fmt::Debug for RelationalBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationalBridge")
            .field("connected", &self.is_connected())
            .finish()
    }
}
