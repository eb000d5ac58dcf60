//! Raw classifier label → canonical stance band.

use timbre_core::StanceBand;

const DEFENSIVE_SYNONYMS: &[&str] = &["hostile", "aggressive"];
const SUPPORTIVE_SYNONYMS: &[&str] = &["kind", "reassuring", "encouraging"];

/// Normalize a classifier label. Canonical labels and a few synonyms are
/// recognised after trimming and lower-casing; anything else is neutral.
pub fn normalize_stance(label: &str) -> StanceBand {
    let lower = label.trim().to_lowercase();
    if let Some(band) = StanceBand::from_label(&lower) {
        return band;
    }
    if DEFENSIVE_SYNONYMS.contains(&lower.as_str()) {
        StanceBand::Defensive
    } else if SUPPORTIVE_SYNONYMS.contains(&lower.as_str()) {
        StanceBand::Supportive
    } else {
        StanceBand::Neutral
    }
}

/// Normalize an optional label. A missing label (classifier failure) is
/// neutral.
pub fn normalize_optional(label: Option<&str>) -> StanceBand {
    label.map(normalize_stance).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_ignore_case_and_whitespace() {
        assert_eq!(normalize_stance("Supportive"), StanceBand::Supportive);
        assert_eq!(normalize_stance("  DEFENSIVE\n"), StanceBand::Defensive);
        assert_eq!(normalize_stance("neutral"), StanceBand::Neutral);
    }

    #[test]
    fn synonyms_map_to_bands() {
        assert_eq!(normalize_stance("Hostile"), StanceBand::Defensive);
        assert_eq!(normalize_stance("aggressive"), StanceBand::Defensive);
        assert_eq!(normalize_stance("kind"), StanceBand::Supportive);
        assert_eq!(normalize_stance("Reassuring"), StanceBand::Supportive);
        assert_eq!(normalize_stance("encouraging"), StanceBand::Supportive);
    }

    #[test]
    fn everything_else_is_neutral() {
        assert_eq!(normalize_stance(""), StanceBand::Neutral);
        assert_eq!(normalize_stance("supportive."), StanceBand::Neutral);
        assert_eq!(normalize_stance("I think it is supportive"), StanceBand::Neutral);
        assert_eq!(normalize_optional(None), StanceBand::Neutral);
        assert_eq!(normalize_optional(Some("kind")), StanceBand::Supportive);
    }
}
