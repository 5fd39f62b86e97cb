/// Webserver middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::logger::{self, LogTag};

/// Log method, path, status and latency of every request
///
/// Logged at debug (`--debug-webserver`); 5xx responses at warning.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let line = format!(
        "{} {} → {} ({} ms)",
        method,
        path,
        status.as_u16(),
        started.elapsed().as_millis()
    );
    if status.is_server_error() {
        logger::warning(LogTag::Webserver, &line);
    } else {
        logger::debug(LogTag::Webserver, &line);
    }

    response
}
