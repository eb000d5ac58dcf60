pub mod bucket;
pub mod extraction;
pub mod generation;
pub mod relational;
pub mod tagged_token;
pub mod taste;

pub use bucket::{Bucket, BucketSet};
pub use extraction::Extraction;
pub use generation::{GenerationConfig, GenerationFallback};
pub use relational::{Direction, Interaction, InteractionState, RelationalDelta};
pub use tagged_token::TaggedToken;
pub use taste::TasteConfig;
