use axum::{extract::Multipart, Json};
use contracts::domain::a002_pdf_chat::aggregate::{AskRequest, AskResponse, UploadResponse};

use super::ApiError;
use crate::domain::a001_personality;
use crate::domain::a002_pdf_chat::service::{self, PdfChatError, UploadedFile};
use crate::domain::a002_pdf_chat::session;
use crate::shared::llm;

/// Имя повторяющегося поля multipart с файлами
const FILES_FIELD: &str = "files";

/// POST /upload
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    let mut files = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Error reading multipart body: {}", e);
                return Err(ApiError::bad_request(format!("Error processing PDFs: {}", e)));
            }
        };

        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!("Error reading {}: {}", filename, e);
            ApiError::bad_request(format!("Error processing PDFs: {}", e))
        })?;

        files.push(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    let personality = a001_personality::service::current().await;
    let llm = llm::provider().map_err(|e| upload_error(e.into()))?;

    let mut session = session::lock().await;
    match service::upload(&mut session, personality, llm.as_ref(), files).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(upload_error(e)),
    }
}

/// POST /ask
pub async fn ask(Json(question): Json<AskRequest>) -> Result<Json<AskResponse>, ApiError> {
    let llm = llm::provider().map_err(|e| ask_error(e.into()))?;

    let mut session = session::lock().await;
    match service::ask(&mut session, llm.as_ref(), question).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(ask_error(e)),
    }
}

fn upload_error(e: PdfChatError) -> ApiError {
    match e {
        PdfChatError::NoFiles | PdfChatError::NoValidPdf => {
            tracing::warn!("Upload rejected: {}", e);
            ApiError::bad_request(e.to_string())
        }
        e => {
            tracing::error!("Error processing PDFs: {}", e);
            ApiError::bad_request(format!("Error processing PDFs: {}", e))
        }
    }
}

fn ask_error(e: PdfChatError) -> ApiError {
    match e {
        PdfChatError::NoDocuments => ApiError::bad_request(e.to_string()),
        e => {
            tracing::error!("Error processing question: {}", e);
            ApiError::internal(format!("Error processing question: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::mock::MockProvider;
    use crate::shared::llm::LlmError;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use contracts::domain::a002_pdf_chat::aggregate::ErrorResponse;
    use std::sync::Arc;
    use tower::ServiceExt;

    const BOUNDARY: &str = "pdfqa-test-boundary";

    fn app() -> Router {
        // Модель не должна вызываться: все запросы ниже отклоняются раньше
        let _ = llm::init_provider(Arc::new(MockProvider::new(vec![])));
        crate::routes::configure_routes(1024 * 1024)
    }

    /// (имя поля, имя файла, содержимое)
    fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{}\r\n", BOUNDARY));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    name, filename
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    name
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body
    }

    fn upload_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, ErrorResponse) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upload_ignores_fields_other_than_files() {
        let body = multipart_body(&[("comment", None, "see attached")]);
        let (status, error) = send(upload_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.detail, "No files provided");
    }

    #[tokio::test]
    async fn test_upload_of_non_pdf_files_is_rejected() {
        let body = multipart_body(&[
            ("comment", None, "see attached"),
            ("files", Some("notes.txt"), "plain text"),
            ("files", Some(""), "no name"),
        ]);
        let (status, error) = send(upload_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.detail, "No valid PDF files were uploaded");
    }

    #[tokio::test]
    async fn test_truncated_multipart_body_is_bad_request() {
        let body = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"a.pdf\"\r\n\r\n%PDF-1.4",
            BOUNDARY
        );
        let (status, error) = send(upload_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.detail.starts_with("Error processing PDFs: "));
    }

    #[tokio::test]
    async fn test_ask_without_documents_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"What is X?"}"#))
            .unwrap();
        let (status, error) = send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.detail, "Please upload a PDF first");
    }

    #[test]
    fn test_upload_error_mapping() {
        let err = upload_error(PdfChatError::NoFiles);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "No files provided");

        let err = upload_error(PdfChatError::NoValidPdf);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "No valid PDF files were uploaded");

        let err = upload_error(PdfChatError::Llm(LlmError::RateLimitExceeded));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "Error processing PDFs: Rate limit exceeded");
    }

    #[test]
    fn test_ask_error_mapping() {
        let err = ask_error(PdfChatError::NoDocuments);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "Please upload a PDF first");

        let err = ask_error(PdfChatError::Llm(LlmError::ApiError("down".to_string())));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "Error processing question: API error: down");
    }
}
