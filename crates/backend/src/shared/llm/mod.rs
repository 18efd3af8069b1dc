#[cfg(test)]
pub mod mock;
pub mod openai_provider;
pub mod types;

pub use types::*;

use once_cell::sync::OnceCell;
use std::sync::Arc;

static PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Зарегистрировать провайдера при старте сервера
pub fn init_provider(provider: Arc<dyn LlmProvider>) -> anyhow::Result<()> {
    PROVIDER
        .set(provider)
        .map_err(|_| anyhow::anyhow!("LLM provider already initialized"))
}

pub fn provider() -> Result<Arc<dyn LlmProvider>, LlmError> {
    PROVIDER
        .get()
        .cloned()
        .ok_or_else(|| LlmError::AuthError("LLM provider is not initialized".to_string()))
}
