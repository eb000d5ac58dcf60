//! # timbre-session
//!
//! The `VoiceMerger` session aggregate ties the workspace together:
//! observe utterances into stance buckets, compose generation styles,
//! export/import bucket snapshots, and fold persona overrides into the base
//! style. Also hosts tracing setup.

pub mod diagnostics;
pub mod merger;
pub mod snapshot;
pub mod taste;
pub mod tracing_setup;
pub mod utterance;

pub use diagnostics::{DebugBucket, LexDetails};
pub use merger::VoiceMerger;
pub use snapshot::{MergerSnapshot, SnapshotCfg};
pub use taste::{LexiconOverride, Persona, SyntaxOverride, SyntaxSource};
pub use utterance::{Observation, Utterance};
