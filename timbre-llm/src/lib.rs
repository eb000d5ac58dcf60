//! # timbre-llm
//!
//! Chat-completion implementations of the stance classifier and
//! part-of-speech tagger traits. Credentials come from a JSON pool loaded
//! from the environment; one credential is picked per request.

pub mod backend;
pub mod classifier;
pub mod client;
pub mod credentials;
pub mod prompts;
pub mod selector;
pub mod tagger;

pub use backend::LlmBackend;
pub use classifier::LlmStanceClassifier;
pub use client::{ChatCompletionClient, ChatRequest};
pub use credentials::{Credential, CredentialPool};
pub use selector::{selector_for, CredentialSelector, RoundRobin, UniformRandom};
pub use tagger::LlmPosTagger;
