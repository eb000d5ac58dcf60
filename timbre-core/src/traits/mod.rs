mod classifier;
mod relational;
mod tagger;

pub use classifier::{IStanceClassifier, NoOpClassifier};
pub use relational::IRelationalModel;
pub use tagger::{IPosTagger, NoOpTagger};
