//! Состояние беседы по загруженным документам (одно на процесс, только в памяти).

use crate::shared::llm::ConversationEntry;
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

/// Документ с извлечённым текстом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct PdfSession {
    /// Документы последней успешной загрузки, в порядке получения
    pub documents: Vec<PdfDocument>,
    /// Тексты всех документов с заголовками `--- Document: ... ---`
    pub combined_text: String,
    /// Фиксируется при загрузке по стилю, выбранному на тот момент
    pub system_message: String,
    /// Всё, что отправляется модели после системного сообщения
    pub history: Vec<ConversationEntry>,
}

impl PdfSession {
    pub fn clear(&mut self) {
        self.documents.clear();
        self.combined_text.clear();
        self.history.clear();
    }

    pub fn has_documents(&self) -> bool {
        !self.combined_text.is_empty()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }

    /// Заменить документы целиком
    pub fn set_documents(&mut self, documents: Vec<PdfDocument>) {
        self.combined_text = documents
            .iter()
            .map(|d| format!("\n\n--- Document: {} ---\n\n{}", d.filename, d.text))
            .collect();
        self.documents = documents;
    }
}

static SESSION: Lazy<Mutex<PdfSession>> = Lazy::new(|| Mutex::new(PdfSession::default()));

/// Захватить сессию на всё время запроса: вызовы модели не перемежаются
pub async fn lock() -> MutexGuard<'static, PdfSession> {
    SESSION.lock().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, text: &str) -> PdfDocument {
        PdfDocument {
            filename: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_combined_text_has_document_headers_in_order() {
        let mut session = PdfSession::default();
        session.set_documents(vec![doc("a.pdf", "alpha"), doc("b.pdf", "beta")]);

        assert_eq!(
            session.combined_text,
            "\n\n--- Document: a.pdf ---\n\nalpha\n\n--- Document: b.pdf ---\n\nbeta"
        );
        assert_eq!(session.file_names(), vec!["a.pdf", "b.pdf"]);
        assert!(session.has_documents());
    }

    #[test]
    fn test_clear_keeps_nothing_but_system_message() {
        let mut session = PdfSession::default();
        session.set_documents(vec![doc("a.pdf", "alpha")]);
        session.system_message = "sys".to_string();
        session.history.push(ConversationEntry::user("q"));

        session.clear();

        assert!(!session.has_documents());
        assert!(session.documents.is_empty());
        assert!(session.history.is_empty());
        assert_eq!(session.system_message, "sys");
    }
}
