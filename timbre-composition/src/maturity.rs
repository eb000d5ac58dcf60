use timbre_core::config::MergerConfig;
use timbre_core::models::Bucket;

/// Whether `bucket` clears the configured maturity thresholds. Callers use
/// this to decide how far to trust learned content; composition itself does
/// not consult it.
pub fn is_mature(bucket: &Bucket, config: &MergerConfig) -> bool {
    bucket.is_mature(config.min_templates_per_stance, config.min_lexicon_per_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timbre_core::Lexicon;

    #[test]
    fn default_thresholds_are_four_and_six() {
        let six: Vec<String> = (0..6).map(|i| format!("t{i}")).collect();
        let lexicon = Lexicon::from_fn(|_| six.clone());
        let mut bucket = Bucket {
            templates: six[..3].to_vec(),
            lexicon,
        };
        let config = MergerConfig::default();
        assert!(!is_mature(&bucket, &config));

        bucket.templates.push("fourth".to_string());
        assert!(is_mature(&bucket, &config));

        bucket.lexicon.modals.pop();
        assert!(!is_mature(&bucket, &config));
    }
}
