use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{FixedOffset, Offset, Utc};

use crate::shared::config::get_config;
use crate::shared::format::format_number;

/// Local wall clock of the shop for log lines, UTC when config is missing
fn local_time() -> String {
    let offset = get_config()
        .ok()
        .and_then(|c| FixedOffset::east_opt(c.business.utc_offset_minutes.saturating_mul(60)))
        .unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset).format("%H:%M:%S").to_string()
}

/// голубой для 2xx, коричневый для остальных
fn color_code(status: StatusCode) -> &'static str {
    if status.is_success() {
        "36"
    } else {
        "33"
    }
}

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль: время магазина, длительность (ms), размер ответа, статус, метод и путь.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let (bytes, size) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let size = format_number(b.len());
            (b, size)
        }
        Err(e) => {
            tracing::warn!("request_logger: cannot read body of {} {}: {}", method, path, e);
            (Default::default(), "error".to_string())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code(parts.status),
        local_time(),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, Body::from(bytes))
}
