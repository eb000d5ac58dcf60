//! # timbre-composition
//!
//! Blends a bucket's learned content with base (or caller fallback) content:
//! learned isolation → retention-bounded merge → boosting of learned tokens.
//! Also carries the bucket maturity predicate.

pub mod boost;
pub mod composer;
pub mod learned;
pub mod maturity;
pub mod retention;

pub use boost::boost_learned;
pub use composer::Composer;
pub use learned::LearnedContent;
pub use maturity::is_mature;
pub use retention::{merge_with_retention, retained_len, RetentionPolicy};
