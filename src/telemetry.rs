//! Subscriber setup and the per-request span/log hooks used by `TraceLayer`.
use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

pub const DEFAULT_FILTER: &str = "markly=debug,axum=info,tower_http=info";

/// Installs the global subscriber; `LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.with_target(false).json().init();
    } else {
        builder.init();
    }
}

/// One `http_request` span per request; `status` is filled in on response.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, req: &Request<B>) -> Span {
        tracing::info_span!(
            "http_request",
            method = %req.method(),
            uri = %req.uri(),
            status = tracing::field::Empty,
        )
    }
}

/// Logs status and latency; 5xx at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseLog;

impl<B> OnResponse<B> for ResponseLog {
    fn on_response(self, res: &Response<B>, latency: Duration, span: &Span) {
        let status = res.status();
        span.record("status", tracing::field::display(status));
        let latency_ms = latency.as_millis() as u64;
        if status.is_server_error() {
            tracing::error!(%status, latency_ms, "response");
        } else {
            tracing::info!(%status, latency_ms, "response");
        }
    }
}
