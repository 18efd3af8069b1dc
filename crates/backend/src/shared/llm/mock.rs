//! Заготовленные ответы модели для тестов

use super::types::{ConversationEntry, LlmError, LlmProvider, LlmReply};
use async_trait::async_trait;
use std::sync::Mutex;

/// Отвечает по очереди и запоминает все запросы
pub struct MockProvider {
    answers: Mutex<Vec<Result<String, String>>>,
    requests: Mutex<Vec<Vec<ConversationEntry>>>,
}

impl MockProvider {
    pub fn new(answers: Vec<Result<&str, &str>>) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .into_iter()
                    .rev()
                    .map(|a| a.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<ConversationEntry>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn chat_completion(&self, messages: Vec<ConversationEntry>) -> Result<LlmReply, LlmError> {
        self.requests.lock().unwrap().push(messages);
        let next = self
            .answers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err("no more answers".to_string()));
        next.map(|content| LlmReply {
            content,
            tokens_used: Some(10),
        })
        .map_err(LlmError::ApiError)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
