//! Извлечение текста из PDF.
//!
//! Файл разбирается прямо из памяти (без временных файлов на диске) в
//! blocking-пуле tokio: разбор PDF занимает CPU, а паника парсера на битом
//! файле превращается в обычную ошибку запроса.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read {filename}: {message}")]
    Extract { filename: String, message: String },

    #[error("PDF worker failed for {filename}: {message}")]
    Worker { filename: String, message: String },
}

/// Проверка по имени файла (регистр важен, как и в клиенте: `accept=".pdf"`)
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.ends_with(".pdf")
}

/// Текст всех страниц документа одной строкой
pub async fn extract_text(filename: &str, bytes: Vec<u8>) -> Result<String, PdfError> {
    let name = filename.to_string();
    let joined = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| PdfError::Worker {
            filename: name.clone(),
            message: e.to_string(),
        })?;

    joined.map_err(|e| PdfError::Extract {
        filename: name,
        message: e.to_string(),
    })
}
