//! # Request Logging Middleware
//!
//! Logs every request and response with method, path, status, and
//! duration. Header values for sensitive headers are redacted before they
//! can reach the logs.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Headers whose values must never appear in logs.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-auth-token"];

/// Log a request/response pair.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                (name.to_string(), "***REDACTED***".to_string())
            } else {
                (
                    name.to_string(),
                    value.to_str().unwrap_or("<binary>").to_string(),
                )
            }
        })
        .collect();

    debug!(headers = ?headers, "[REQUEST] {} {}", method, path);

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_server_error() {
        warn!("[RESPONSE] {} {} -> {} ({:?})", method, path, status, duration);
    } else {
        info!("[RESPONSE] {} {} -> {} ({:?})", method, path, status, duration);
    }

    response
}
