//! # timbre-core
//!
//! Foundation crate for the Timbre voice engine.
//! Defines the lexicon and template vocabulary, stance bands, buckets,
//! collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod stance;
pub mod template;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TimbreConfig;
pub use errors::{TimbreError, TimbreResult};
pub use lexicon::{Lexicon, LexiconCounts, PosCategory};
pub use models::{Bucket, Extraction, GenerationConfig, GenerationFallback, TasteConfig};
pub use stance::{RelationalStance, StanceBand};
pub use template::{TemplateSlot, VerbForm};
