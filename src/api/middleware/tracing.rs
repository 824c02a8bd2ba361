//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// - Span at `INFO` with method, URI and HTTP version (headers are not
///   recorded, they carry the session cookie)
/// - Request start at `DEBUG`
/// - Response at `INFO` with status and latency in milliseconds
/// - 5xx responses additionally at `WARN`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/ version=HTTP/1.1}: finished processing request latency=2 ms status=200
/// INFO request{method=GET uri=/ version=HTTP/1.1}: finished processing request latency=1 ms status=303
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
