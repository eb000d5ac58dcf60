//! Shared client + credential pool used by both adapters.

use timbre_core::config::LlmConfig;
use timbre_core::errors::LlmError;
use timbre_core::TimbreResult;

use crate::client::{ChatCompletionClient, ChatRequest};
use crate::credentials::CredentialPool;
use crate::selector::{selector_for, CredentialSelector};

pub struct LlmBackend {
    client: ChatCompletionClient,
    pool: CredentialPool,
    selector: Box<dyn CredentialSelector>,
    stance_max_tokens: u32,
    pos_max_tokens: u32,
}

impl LlmBackend {
    /// Build from config, loading credentials from the configured env var.
    pub fn from_config(config: &LlmConfig) -> TimbreResult<Self> {
        Self::with_pool(config, CredentialPool::from_env(config))
    }

    pub fn with_pool(config: &LlmConfig, pool: CredentialPool) -> TimbreResult<Self> {
        Ok(Self {
            client: ChatCompletionClient::new(config)?,
            pool,
            selector: selector_for(config.selection),
            stance_max_tokens: config.stance_max_tokens,
            pos_max_tokens: config.pos_max_tokens,
        })
    }

    /// Swap the selection strategy.
    pub fn with_selector(mut self, selector: Box<dyn CredentialSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn has_credentials(&self) -> bool {
        !self.pool.is_empty()
    }

    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }

    pub fn stance_max_tokens(&self) -> u32 {
        self.stance_max_tokens
    }

    pub fn pos_max_tokens(&self) -> u32 {
        self.pos_max_tokens
    }

    /// Pick a credential and run one completion.
    pub async fn complete(&self, request: &ChatRequest<'_>) -> TimbreResult<String> {
        let credential = self
            .selector
            .pick(&self.pool)
            .ok_or(LlmError::NoCredentials)?;
        self.client.complete(credential, request).await
    }
}

impl std::fmt::Debug for LlmBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmBackend")
            .field("credentials", &self.pool.len())
            .field("stance_max_tokens", &self.stance_max_tokens)
            .field("pos_max_tokens", &self.pos_max_tokens)
            .finish()
    }
}
