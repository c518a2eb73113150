use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

/// 5xx responses must not carry internal details to the client.
/// Logs whatever body a 5xx response has and replaces it with an empty one.
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        match to_bytes(response.into_body(), usize::MAX).await {
            Ok(content) if !content.is_empty() => tracing::error!("{:?}", content),
            Err(e) => tracing::error!(
                "unable to convert {} response body to bytes :: {:?}",
                status,
                e
            ),
            _ => {}
        }

        return status.into_response();
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    fn router() -> Router {
        Router::new()
            .route(
                "/leak",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream at 10.0.0.7 refused") }),
            )
            .route("/teapot", get(|| async { (StatusCode::IM_A_TEAPOT, "short and stout") }))
            .route("/panic", get(|| async {
                #[allow(unreachable_code, unused_variables)]
                let unit: () = panic!("aggregation invariant broken");
                unit
            }))
            .layer(CatchPanicLayer::new())
            .layer(from_fn(mw_handle_leaked_5xx))
    }

    async fn call(path: &str) -> (StatusCode, axum::body::Bytes) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        (status, to_bytes(response.into_body(), usize::MAX).await.unwrap())
    }

    #[tokio::test]
    async fn test_5xx_body_is_stripped() {
        let (status, body) = call("/leak").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_panic_becomes_bare_500() {
        let (status, body) = call("/panic").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_4xx_passes_through() {
        let (status, body) = call("/teapot").await;

        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(&body[..], b"short and stout");
    }
}
