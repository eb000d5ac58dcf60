use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Template and lexicon pulled out of one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extraction {
    pub template: String,
    pub lexicon: Lexicon,
}
