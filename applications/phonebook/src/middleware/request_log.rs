/// Per-request access log
use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Same ceiling axum's `Json` extractor applies by default
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log method, path, status, response size, latency and the request body
///
/// The body is buffered so it can be logged and then handed on unchanged.
pub async fn log_requests(request: Request, next: Next) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT).await.map_err(|e| {
        tracing::warn!("Rejected request body for {} {}: {}", method, uri, e);
        StatusCode::PAYLOAD_TOO_LARGE
    })?;
    let logged_body = if bytes.is_empty() {
        "-".to_string()
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };
    let request = Request::from_parts(parts, Body::from(bytes));

    let started = Instant::now();
    let response = next.run(request).await;

    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    tracing::info!(
        "{} {} {} {} - {:.3} ms {}",
        method,
        uri,
        response.status().as_u16(),
        content_length,
        started.elapsed().as_secs_f64() * 1000.0,
        logged_body
    );

    Ok(response)
}
