//! # timbre-learning
//!
//! Stance normalization (raw classifier label → stance band) and the
//! append-only bucket store that accumulates templates and lexicon per band.

pub mod bucket_store;
pub mod normalizer;

pub use bucket_store::{BucketStore, StoreOutcome};
pub use normalizer::{normalize_optional, normalize_stance};
