use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Personality
        .route(
            "/set-personality",
            post(handlers::a001_personality::set_personality),
        )
        // A002 PDF chat
        .route(
            "/upload",
            post(handlers::a002_pdf_chat::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/ask", post(handlers::a002_pdf_chat::ask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::a002_pdf_chat::aggregate::ErrorResponse;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let response = configure_routes(1024)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_personality_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/set-personality")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"type":"pirate"}"#))
            .unwrap();
        let response = configure_routes(1024).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            error.detail,
            "Invalid personality type. Choose from: normal, salesperson, or shakespeare"
        );
    }
}
