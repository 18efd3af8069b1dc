use async_trait::async_trait;
use thiserror::Error;

/// Сообщения беседы те же, что и в контрактах: роль + текст
pub use contracts::domain::a002_pdf_chat::aggregate::{ChatRole, ConversationEntry};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Ответ модели: текст и расход токенов (для логов)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmReply {
    pub content: String,
    pub tokens_used: Option<u32>,
}

impl LlmReply {
    /// Строка для логов: начало ответа и токены
    pub fn summary(&self) -> String {
        let head: String = self.content.chars().take(100).collect();
        match self.tokens_used {
            Some(tokens) => format!("{}... ({} tokens)", head, tokens),
            None => format!("{}...", head),
        }
    }
}

/// Модель, с которой ведётся беседа по документам
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Полная история (системное сообщение первым) → один ответ
    async fn chat_completion(&self, messages: Vec<ConversationEntry>) -> Result<LlmReply, LlmError>;

    fn provider_name(&self) -> &str;
}
