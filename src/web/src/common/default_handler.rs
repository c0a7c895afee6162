use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

/// Anything outside the card endpoint is a plain 404.
pub async fn default_handler() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        axum::body::Bytes::from_static(b"404 Not Found"),
    )
        .into_response()
}
