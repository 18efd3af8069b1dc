//! Логи backend: tracing в stdout и в `target/logs/backend.log`, плюс
//! короткая строка на каждый HTTP-запрос.

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,tower_http=warn";

/// Подключить tracing. Фильтр берётся из RUST_LOG.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// ANSI-цвет строки запроса: голубой для 200, коричневый для остальных
fn status_color(status: u16) -> &'static str {
    if status == 200 {
        "36"
    } else {
        "33"
    }
}

fn request_line(color: &str, millis: u128, size: &str, status: u16, method: &str, path: &str) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status,
        method,
        path
    )
}

/// Middleware: время, размер ответа, статус, метод, путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();
    let status = parts.status.as_u16();

    // Тело читается целиком, чтобы узнать реальный размер
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = super::format::format_size(bytes.len());
            println!(
                "{}",
                request_line(
                    status_color(status),
                    start.elapsed().as_millis(),
                    &size,
                    status,
                    method.as_str(),
                    &path
                )
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            println!(
                "{}",
                request_line("33", start.elapsed().as_millis(), "error", status, method.as_str(), &path)
            );
            Response::from_parts(parts, Body::default())
        }
    }
}
