use serde::{Deserialize, Serialize};

/// Роль сообщения в беседе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    /// Префикс строки в ленте беседы
    pub fn speaker_label(&self) -> &'static str {
        match self {
            ChatRole::User => "You: ",
            ChatRole::System => "System: ",
            ChatRole::Assistant => "AI: ",
        }
    }
}

/// Запись беседы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub role: ChatRole,
    pub content: String,
}

impl ConversationEntry {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Ответ POST /upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub answer: String,
    #[serde(default)]
    pub files: Vec<String>,
}

/// POST /ask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub text: String,
}

/// Ответ POST /ask
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Тело ошибки backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// "PDF" / "PDFs"
pub fn pdf_noun(count: usize) -> &'static str {
    if count > 1 {
        "PDFs"
    } else {
        "PDF"
    }
}
