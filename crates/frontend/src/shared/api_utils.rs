//! API utilities for frontend-backend communication
//!
//! Builds backend URLs and performs `fetch` requests, returning a typed
//! [`ApiError`] instead of a bare string so callers can log the category.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Backend address used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Категории ошибок запроса к backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (CORS, сеть, сервер не запущен)
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил не 2xx
    #[error("HTTP {0}")]
    Status(u16),

    /// Тело ответа не разобрано
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Taken from the `API_URL` environment variable at build time
/// (`API_URL=https://qa.example.com trunk build`), otherwise
/// [`DEFAULT_API_URL`]. A trailing slash is dropped.
pub fn api_base() -> String {
    normalize_base(option_env!("API_URL"))
}

fn normalize_base(configured: Option<&str>) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => DEFAULT_API_URL.to_string(),
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/ask");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Разобрать JSON-тело ответа
pub fn decode<R: DeserializeOwned>(text: &str) -> Result<R, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST с JSON-телом
pub async fn post_json<B, R>(path: &str, body: &B) -> Result<R, ApiError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    use web_sys::{Request, RequestInit, RequestMode};

    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    send(request).await
}

/// POST multipart/form-data (boundary выставляет браузер)
pub async fn post_form<R: DeserializeOwned>(
    path: &str,
    form_data: &web_sys::FormData,
) -> Result<R, ApiError> {
    use web_sys::{Request, RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form_data);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| ApiError::Network(format!("{e:?}")))?;

    send(request).await
}

async fn send<R: DeserializeOwned>(request: web_sys::Request) -> Result<R, ApiError> {
    use wasm_bindgen::JsCast;
    use web_sys::Response;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(
        resp.text().map_err(|e| ApiError::Decode(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    let text: String = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("bad text".to_string()))?;

    decode(&text)
}
