use axum::http::StatusCode;

pub const PATH: &str = "/health";

#[tracing::instrument(ret)]
pub async fn handler() -> StatusCode {
    StatusCode::OK
}
