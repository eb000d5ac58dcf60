// Closed word lists and built-in style defaults.

/// Templates used when the taste config supplies none.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "My {noun} is {adjective}",
    "This {noun} {verb}",
    "Through {adjective} {noun} I {verb}",
];

pub const DEFAULT_ADJECTIVES: &[&str] = &["present", "emerging", "current"];
pub const DEFAULT_NOUNS: &[&str] = &["form", "awareness", "presence"];
pub const DEFAULT_VERBS: &[&str] = &["being", "becoming", "emerging"];
pub const DEFAULT_ADVERBS: &[&str] = &["now", "fully", "deeply"];
pub const DEFAULT_CONJUNCTIONS: &[&str] = &["and", "while", "as"];

// --- Heuristic tagger closed classes (matched against lower-cased tokens) ---
pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "yet", "so", "because", "although"];
pub const PRONOUNS: &[&str] = &["i", "you", "we"];
pub const ARTICLES: &[&str] = &["a", "an", "the"];
pub const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "with", "about", "into", "through", "over", "between",
];
pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have",
];
pub const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

/// Characters removed from a token before it is classified.
pub const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '"'];

// --- Relational nudging ---
pub const RELATIONAL_SCORE_OFFSET: f64 = 0.5;
pub const RELATIONAL_SCORE_SCALE: f64 = 0.5;

// --- Diagnostics ---
pub const DEBUG_TEMPLATE_SAMPLE_SIZE: usize = 10;
pub const DEBUG_LEXICON_SAMPLE_SIZE: usize = 10;
