// Single source of truth for all default values.

// --- Merger ---
pub const DEFAULT_MIN_TEMPLATES_PER_STANCE: usize = 4;
pub const DEFAULT_MIN_LEXICON_PER_POS: usize = 6;
pub const DEFAULT_BASE_TEMPLATE_RETENTION: f64 = 0.5;
pub const DEFAULT_BASE_LEXICON_RETENTION: f64 = 0.5;

// --- LLM ---
pub const DEFAULT_CREDENTIALS_ENV: &str = "TIMBRE_LLM_CONFIGS";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LLM_MAX_RETRIES: u32 = 0;
pub const DEFAULT_LLM_INITIAL_BACKOFF_MS: u64 = 250;
pub const DEFAULT_STANCE_MAX_TOKENS: u32 = 16;
pub const DEFAULT_POS_MAX_TOKENS: u32 = 512;

// --- Observability ---
pub const DEFAULT_LOG_ENV: &str = "TIMBRE_LOG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_OUTPUT: bool = false;
