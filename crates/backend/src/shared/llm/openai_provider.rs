use super::types::{ChatRole, ConversationEntry, LlmError, LlmProvider, LlmReply};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;

/// OpenAI провайдер
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiProvider {
    /// Создать новый OpenAI провайдер
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);

        Self { client, model }
    }

    /// Создать с кастомным endpoint (для совместимых API)
    pub fn new_with_endpoint(api_endpoint: String, api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_endpoint);
        let client = Client::with_config(config);

        Self { client, model }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Сообщение в формате запроса OpenAI
fn to_openai_message(msg: ConversationEntry) -> Result<ChatCompletionRequestMessage, LlmError> {
    let invalid = |e: async_openai::error::OpenAIError| LlmError::InvalidRequest(e.to_string());
    let converted = match msg.role {
        ChatRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(msg.content)
            .build()
            .map_err(invalid)?
            .into(),
        ChatRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(msg.content)
            .build()
            .map_err(invalid)?
            .into(),
        ChatRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(msg.content)
            .build()
            .map_err(invalid)?
            .into(),
    };
    Ok(converted)
}

/// Ответ первого варианта; пустой или отсутствующий текст даёт пустой ответ
fn into_reply(response: CreateChatCompletionResponse) -> Result<LlmReply, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiError("No response from API".to_string()))?;

    Ok(LlmReply {
        content: choice.message.content.unwrap_or_default(),
        tokens_used: response.usage.map(|u| u.total_tokens),
    })
}

/// Разложить текст ошибки клиента по категориям
fn classify_error(message: String) -> LlmError {
    let lower = message.to_lowercase();
    if lower.contains("401") || lower.contains("authentication") || lower.contains("api key") {
        LlmError::AuthError(message)
    } else if lower.contains("429") || lower.contains("rate limit") {
        LlmError::RateLimitExceeded
    } else {
        LlmError::ApiError(message)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn chat_completion(&self, messages: Vec<ConversationEntry>) -> Result<LlmReply, LlmError> {
        let openai_messages = messages
            .into_iter()
            .map(to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("{} request: {} messages", self.model, openai_messages.len());

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(openai_messages)
            .build()
            .map_err(|e| LlmError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| classify_error(e.to_string()))?;

        into_reply(response)
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_error() {
        assert!(matches!(
            classify_error("status 401: Incorrect API key provided".to_string()),
            LlmError::AuthError(_)
        ));
        assert!(matches!(
            classify_error("Rate limit reached for gpt-4o-mini".to_string()),
            LlmError::RateLimitExceeded
        ));
        assert!(matches!(
            classify_error("connection refused".to_string()),
            LlmError::ApiError(_)
        ));
    }

    #[test]
    fn test_roles_convert_to_matching_variants() {
        assert!(matches!(
            to_openai_message(ConversationEntry::system("s")).unwrap(),
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            to_openai_message(ConversationEntry::user("u")).unwrap(),
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(matches!(
            to_openai_message(ConversationEntry::assistant("a")).unwrap(),
            ChatCompletionRequestMessage::Assistant(_)
        ));
    }

    fn response(choices: &str) -> CreateChatCompletionResponse {
        serde_json::from_str(&format!(
            r#"{{"id":"chatcmpl-1","object":"chat.completion","created":0,"model":"gpt-4o-mini","choices":{},"usage":{{"prompt_tokens":7,"completion_tokens":5,"total_tokens":12}}}}"#,
            choices
        ))
        .unwrap()
    }

    #[test]
    fn test_into_reply_takes_first_choice() {
        let reply = into_reply(response(
            r#"[{"index":0,"message":{"role":"assistant","content":"Here's a brief summary"},"finish_reason":"stop"}]"#,
        ))
        .unwrap();
        assert_eq!(reply.content, "Here's a brief summary");
        assert_eq!(reply.tokens_used, Some(12));
    }

    #[test]
    fn test_missing_content_is_empty_answer() {
        let reply = into_reply(response(
            r#"[{"index":0,"message":{"role":"assistant","content":null},"finish_reason":"stop"}]"#,
        ))
        .unwrap();
        assert_eq!(reply.content, "");
    }

    #[test]
    fn test_no_choices_is_api_error() {
        let err = into_reply(response("[]")).unwrap_err();
        assert!(matches!(err, LlmError::ApiError(_)));
    }
}
