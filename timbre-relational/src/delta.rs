use timbre_core::constants::{RELATIONAL_SCORE_OFFSET, RELATIONAL_SCORE_SCALE};
use timbre_core::models::RelationalDelta;
use timbre_core::StanceBand;

/// Base delta for an observed stance.
pub fn stance_to_delta(band: StanceBand) -> RelationalDelta {
    match band {
        StanceBand::Supportive => RelationalDelta::SUPPORTIVE,
        StanceBand::Defensive => RelationalDelta::DEFENSIVE,
        StanceBand::Neutral => RelationalDelta::NEUTRAL,
    }
}

/// Scale by `0.5 + 0.5 * clamp(score, 0, 1)`. A missing or non-finite score
/// leaves the delta as is.
pub fn scale_delta(delta: RelationalDelta, score: Option<f64>) -> RelationalDelta {
    match score {
        Some(score) if score.is_finite() => {
            let clamped = score.clamp(0.0, 1.0);
            delta.scaled(RELATIONAL_SCORE_OFFSET + RELATIONAL_SCORE_SCALE * clamped)
        }
        _ => delta,
    }
}
