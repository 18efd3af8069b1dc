//! PDF Chat - состояние страницы и его переходы
//!
//! Всё состояние страницы живёт в одном `ConversationState`. Каждое действие
//! разбито на два перехода:
//! - `begin_*`: синхронная проверка и оптимистичные изменения (Idle → Pending);
//! - `finish_*`: применение типизированного результата запроса (Pending → Idle).
//!
//! Сеть здесь не используется, поэтому переходы проверяются обычными тестами.

use crate::shared::api_utils::ApiError;
use contracts::domain::a001_personality::aggregate::SetPersonalityResponse;
use contracts::domain::a002_pdf_chat::aggregate::{
    pdf_noun, AskResponse, ChatRole, ConversationEntry, UploadResponse,
};
use contracts::enums::Personality;
use uuid::Uuid;

pub const ERR_SET_PERSONALITY: &str = "Failed to set AI personality. Please try again.";
pub const ERR_NO_FILES: &str = "Please select at least one PDF file.";
pub const ERR_UPLOAD: &str = "Failed to upload PDFs. Please try again.";
pub const ERR_ASK: &str = "Failed to get answer. Please try again.";

/// Какой запрос сейчас в полёте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending(RequestKind),
}

/// Строка ленты беседы; `id` нужен только как ключ для `<For>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
}

impl From<ConversationEntry> for TranscriptEntry {
    fn from(entry: ConversationEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: entry.role,
            content: entry.content,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationState {
    pub personality: Personality,
    /// Имена выбранных, но ещё не отправленных файлов
    pub pending_files: Vec<String>,
    /// Имена файлов из последнего успешного ответа /upload
    pub uploaded_files: Vec<String>,
    pub question: String,
    pub transcript: Vec<TranscriptEntry>,
    pub phase: RequestPhase,
    /// Последняя ошибка, без истории
    pub error: Option<String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Производные флаги для элементов управления
    // ------------------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Pending(_))
    }

    pub fn has_uploads(&self) -> bool {
        !self.uploaded_files.is_empty()
    }

    /// Стиль фиксируется после первой загрузки
    pub fn personality_disabled(&self) -> bool {
        self.is_loading() || self.has_uploads()
    }

    pub fn file_input_disabled(&self) -> bool {
        self.is_loading()
    }

    pub fn upload_disabled(&self) -> bool {
        self.is_loading() || self.pending_files.is_empty()
    }

    pub fn question_disabled(&self) -> bool {
        self.is_loading() || !self.has_uploads()
    }

    pub fn ask_disabled(&self) -> bool {
        self.question_disabled() || self.question.trim().is_empty()
    }

    pub fn ask_caption(&self) -> &'static str {
        if self.is_loading() {
            "Loading..."
        } else {
            "Ask"
        }
    }

    // ------------------------------------------------------------------
    // Выбор файлов и стиля
    // ------------------------------------------------------------------

    /// Новый выбор файлов заменяет предыдущий
    pub fn select_files(&mut self, names: Vec<String>) {
        self.pending_files = names;
    }

    /// Возвращает стиль, который нужно отправить на backend (ровно один запрос),
    /// или `None`, если выбор сейчас заблокирован.
    pub fn select_personality(&mut self, personality: Personality) -> Option<Personality> {
        if self.personality_disabled() {
            return None;
        }
        self.personality = personality;
        Some(personality)
    }

    /// Локальный выбор не откатывается при ошибке
    pub fn finish_personality(
        &mut self,
        personality: Personality,
        result: Result<SetPersonalityResponse, ApiError>,
    ) {
        match result {
            Ok(_) => {
                self.transcript = vec![ConversationEntry::system(format!(
                    "AI personality set to {}.",
                    personality.display_name()
                ))
                .into()];
            }
            Err(_) => self.error = Some(ERR_SET_PERSONALITY.to_string()),
        }
    }

    // ------------------------------------------------------------------
    // Загрузка PDF
    // ------------------------------------------------------------------

    /// Количество отправляемых файлов, если запрос нужно выполнить
    pub fn begin_upload(&mut self) -> Option<usize> {
        if self.is_loading() {
            return None;
        }
        if self.pending_files.is_empty() {
            self.error = Some(ERR_NO_FILES.to_string());
            return None;
        }
        self.phase = RequestPhase::Pending(RequestKind::Upload);
        self.error = None;
        Some(self.pending_files.len())
    }

    pub fn finish_upload(&mut self, sent: usize, result: Result<UploadResponse, ApiError>) {
        match result {
            Ok(resp) => {
                self.uploaded_files = resp.files;
                self.transcript = vec![
                    ConversationEntry::system(format!(
                        "{} {} uploaded successfully. AI will respond as {}.",
                        sent,
                        pdf_noun(sent),
                        self.personality.respond_as()
                    ))
                    .into(),
                    ConversationEntry::assistant(resp.answer).into(),
                ];
            }
            Err(_) => self.error = Some(ERR_UPLOAD.to_string()),
        }
        self.phase = RequestPhase::Idle;
    }

    // ------------------------------------------------------------------
    // Вопросы
    // ------------------------------------------------------------------

    /// Текст вопроса для отправки. Вопрос сразу попадает в ленту.
    pub fn begin_question(&mut self) -> Option<String> {
        if self.is_loading() || self.question.trim().is_empty() {
            return None;
        }
        self.phase = RequestPhase::Pending(RequestKind::Question);
        self.error = None;

        let text = self.question.clone();
        self.transcript
            .push(ConversationEntry::user(text.clone()).into());
        Some(text)
    }

    /// Вопрос пользователя остаётся в ленте и при ошибке
    pub fn finish_question(&mut self, result: Result<AskResponse, ApiError>) {
        match result {
            Ok(resp) => self
                .transcript
                .push(ConversationEntry::assistant(resp.answer).into()),
            Err(_) => self.error = Some(ERR_ASK.to_string()),
        }
        self.question.clear();
        self.phase = RequestPhase::Idle;
    }
}
