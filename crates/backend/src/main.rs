pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use shared::llm::openai_provider::OpenAiProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    shared::logger::init_tracing(&std::path::Path::new("target").join("logs"))?;

    let config = shared::config::load_config()?;

    let api_key = shared::config::resolve_api_key(&config);
    tracing::info!(
        "OpenAI API key configured: {}",
        if api_key.is_some() { "Yes" } else { "No" }
    );
    let api_key = api_key.unwrap_or_default();
    let provider = match config.openai.api_endpoint.clone() {
        Some(endpoint) => {
            OpenAiProvider::new_with_endpoint(endpoint, api_key, config.openai.model.clone())
        }
        None => OpenAiProvider::new(api_key, config.openai.model.clone()),
    };
    tracing::info!("Using model: {}", provider.model());
    shared::llm::init_provider(Arc::new(provider))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let max_upload_bytes = config.server.max_upload_mb * 1024 * 1024;
    let app = routes::configure_routes(max_upload_bytes)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(shared::logger::request_logger))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
