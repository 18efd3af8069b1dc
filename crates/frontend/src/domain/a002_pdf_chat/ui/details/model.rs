//! PDF Chat - Model (API functions)

use crate::shared::api_utils::{post_form, post_json, ApiError};
use contracts::domain::a002_pdf_chat::aggregate::{AskRequest, AskResponse, UploadResponse};

/// Отправить все выбранные PDF одним multipart-запросом (поле `files` на каждый файл)
pub async fn upload_files(files: &[web_sys::File]) -> Result<UploadResponse, ApiError> {
    let form_data = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for file in files {
        form_data
            .append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    post_form("/upload", &form_data).await
}

/// Задать вопрос по загруженным документам
pub async fn ask_question(text: &str) -> Result<AskResponse, ApiError> {
    post_json(
        "/ask",
        &AskRequest {
            text: text.to_string(),
        },
    )
    .await
}
