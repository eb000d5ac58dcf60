//! Retention: how much of the base survives once learned content exists.

use timbre_core::config::defaults::{
    DEFAULT_BASE_LEXICON_RETENTION, DEFAULT_BASE_TEMPLATE_RETENTION,
};
use timbre_core::config::MergerConfig;

/// Sanitized retention fractions, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionPolicy {
    template: f64,
    lexicon: f64,
}

impl RetentionPolicy {
    /// Out-of-range values are clamped; non-finite values take the default.
    pub fn new(template: f64, lexicon: f64) -> Self {
        Self {
            template: sanitize(template, DEFAULT_BASE_TEMPLATE_RETENTION),
            lexicon: sanitize(lexicon, DEFAULT_BASE_LEXICON_RETENTION),
        }
    }

    pub fn from_config(config: &MergerConfig) -> Self {
        Self::new(config.base_template_retention, config.base_lexicon_retention)
    }

    pub fn template(&self) -> f64 {
        self.template
    }

    pub fn lexicon(&self) -> f64 {
        self.lexicon
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_TEMPLATE_RETENTION, DEFAULT_BASE_LEXICON_RETENTION)
    }
}

fn sanitize(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        default
    }
}

/// Number of leading base entries kept under `retention`: at least one when
/// the base is non-empty, and the whole base at full retention.
pub fn retained_len(base_len: usize, retention: f64) -> usize {
    if base_len == 0 || retention >= 1.0 {
        return base_len;
    }
    ((base_len as f64 * retention).floor() as usize).max(1)
}

/// Learned entries first (deduped, in order), then the retained base prefix
/// minus anything already emitted. With nothing learned the base is returned
/// unchanged.
pub fn merge_with_retention(learned: &[String], base: &[String], retention: f64) -> Vec<String> {
    if learned.is_empty() {
        return base.to_vec();
    }
    let kept = &base[..retained_len(base.len(), retention)];

    let mut out: Vec<String> = Vec::with_capacity(learned.len() + kept.len());
    for entry in learned.iter().chain(kept) {
        if !out.contains(entry) {
            out.push(entry.clone());
        }
    }
    out
}
