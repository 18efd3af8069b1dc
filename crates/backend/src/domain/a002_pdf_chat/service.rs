use super::session::{PdfDocument, PdfSession};
use crate::domain::a001_personality::service::system_message;
use crate::shared::llm::{ConversationEntry, LlmError, LlmProvider};
use crate::shared::pdf::{self, PdfError};
use contracts::domain::a002_pdf_chat::aggregate::{pdf_noun, AskRequest, AskResponse, UploadResponse};
use contracts::enums::Personality;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfChatError {
    #[error("No files provided")]
    NoFiles,

    #[error("No valid PDF files were uploaded")]
    NoValidPdf,

    #[error("Please upload a PDF first")]
    NoDocuments,

    #[error("{0}")]
    Pdf(#[from] PdfError),

    #[error("{0}")]
    Llm(#[from] LlmError),
}

/// Файл из multipart-запроса
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

const ASK_INSTRUCTIONS: &str = "Keeping in mind the instructions provided and information in the document, answer the question. In case the question asked is totally irrelevant to the information provided in the document, mention that the question is irrelevant. If the question asked is ambiguous or unclear, you should gracefully ask for clatification. If there happen to be multiple answers, rank and filter them based on relevance.";

/// Первый запрос к модели: краткое содержание загруженных документов
pub fn first_prompt(document_count: usize) -> String {
    let plural = if document_count > 1 { "s" } else { "" };
    format!(
        "You're given {count} documents with information. You'll be asked questions about these documents, and as a helpful assistant, extract meaningful information and answer questions relevantly. First, provide a 200-word summary of the document{plural}. Start with 'Here's a brief summary of the document{plural}'. The text is as follows: ",
        count = document_count,
        plural = plural,
    )
}

/// Системное сообщение для вопросов по документам
pub fn ask_system_message(system_message: &str) -> String {
    format!("{}. {}", system_message, ASK_INSTRUCTIONS)
}

/// Извлечь текст из PDF-файлов, остальные пропустить
pub async fn extract_documents(files: Vec<UploadedFile>) -> Result<Vec<PdfDocument>, PdfChatError> {
    let mut documents = Vec::with_capacity(files.len());

    for file in files {
        tracing::info!("Processing file: {}", file.filename);
        if !pdf::is_pdf_filename(&file.filename) {
            tracing::warn!("Skipping non-PDF file: {}", file.filename);
            continue;
        }

        let text = pdf::extract_text(&file.filename, file.bytes).await?;
        documents.push(PdfDocument {
            filename: file.filename,
            text,
        });
    }

    Ok(documents)
}

/// POST /upload
///
/// Предыдущая сессия сбрасывается до разбора файлов.
pub async fn upload(
    session: &mut PdfSession,
    personality: Personality,
    llm: &dyn LlmProvider,
    files: Vec<UploadedFile>,
) -> Result<UploadResponse, PdfChatError> {
    if files.is_empty() {
        return Err(PdfChatError::NoFiles);
    }

    session.clear();

    let documents = extract_documents(files).await?;
    load_documents(session, personality, llm, documents).await
}

/// Сохранить документы в сессии и получить от модели их краткое содержание
pub async fn load_documents(
    session: &mut PdfSession,
    personality: Personality,
    llm: &dyn LlmProvider,
    documents: Vec<PdfDocument>,
) -> Result<UploadResponse, PdfChatError> {
    if documents.is_empty() {
        return Err(PdfChatError::NoValidPdf);
    }

    let count = documents.len();
    session.history.clear();
    session.set_documents(documents);
    tracing::info!(
        "Extracted text from {} files, total length: {}",
        count,
        session.combined_text.len()
    );

    session.system_message = system_message(personality).to_string();
    session.history.push(ConversationEntry::user(format!(
        "{}{}",
        first_prompt(count),
        session.combined_text
    )));

    tracing::info!("Sharing PDF texts with {}", llm.provider_name());
    let mut messages = Vec::with_capacity(session.history.len() + 1);
    messages.push(ConversationEntry::system(session.system_message.clone()));
    messages.extend(session.history.iter().cloned());

    let response = llm.chat_completion(messages).await?;
    tracing::info!("Received answer: {}", response.summary());
    session
        .history
        .push(ConversationEntry::assistant(response.content.clone()));

    Ok(UploadResponse {
        message: format!(
            "{} {} uploaded and processed successfully",
            count,
            pdf_noun(count)
        ),
        answer: response.content,
        files: session.file_names(),
    })
}

/// POST /ask
///
/// Вопрос остаётся в истории, даже если модель не ответила.
pub async fn ask(
    session: &mut PdfSession,
    llm: &dyn LlmProvider,
    question: AskRequest,
) -> Result<AskResponse, PdfChatError> {
    tracing::info!("Received question: {}", question.text);

    if !session.has_documents() {
        tracing::warn!("No PDF text available");
        return Err(PdfChatError::NoDocuments);
    }

    session.history.push(ConversationEntry::user(question.text));

    let mut messages = Vec::with_capacity(session.history.len() + 1);
    messages.push(ConversationEntry::system(ask_system_message(&session.system_message)));
    messages.extend(session.history.iter().cloned());

    tracing::info!("Sending request to {}", llm.provider_name());
    let response = llm.chat_completion(messages).await?;
    tracing::info!("Received answer: {}", response.summary());
    session
        .history
        .push(ConversationEntry::assistant(response.content.clone()));

    Ok(AskResponse {
        answer: response.content,
    })
}
