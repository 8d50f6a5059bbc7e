//! Request logging hooks for `tower_http::trace::TraceLayer`.

use std::time::Duration;

use axum::{body::Body, http::Request, http::StatusCode};
use tracing::Span;

/// Paths (suffixes, case-insensitive) that are never request-logged.
const UNLOGGED_SUFFIXES: [&str; 2] = ["healthcheck", ".js"];

/// `make_span_with` hook. Skipped paths get a disabled span, which
/// `record_response` treats as "do not log".
pub fn make_span(req: &Request<Body>) -> Span {
    let path = req.uri().path();
    if !should_log(path) {
        return Span::none();
    }
    tracing::info_span!(
        "http.request",
        method = %req.method(),
        path = %path,
        query = req.uri().query().unwrap_or(""),
    )
}

/// `on_response` hook: one combined event per request with status and latency.
pub fn record_response(status: StatusCode, latency: Duration, span: &Span) {
    if span.is_none() {
        return;
    }
    tracing::info!(
        parent: span,
        status = status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        "request completed"
    );
}

pub fn should_log(path: &str) -> bool {
    let lower = path.to_lowercase();
    !UNLOGGED_SUFFIXES.iter().any(|s| lower.ends_with(s))
}
