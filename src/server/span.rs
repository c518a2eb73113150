use axum::http::Request;
use tracing::Span;

pub fn span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("<unknown-request-id>");

    // error_span so the request context survives when the level filter is warn or error
    tracing::error_span!(
        "request",
        "{} {} {}",
        request_id,
        request.method(),
        request.uri(),
    )
}
