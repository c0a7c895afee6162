use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error};

pub type ApiResult<T> = Result<T, ApiError>;

/// Handler failures collapse into two wire responses: 400 "invalid request
/// body" and 500 "internal failure". The detail never crosses the wire, it
/// only shapes the log line.
#[derive(Debug)]
pub enum ApiError {
    InvalidBody(String),
    RenderFailed(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidBody(detail) => {
                debug!("rejected payload: {}", detail);
                (StatusCode::BAD_REQUEST, "invalid request body").into_response()
            }
            ApiError::RenderFailed(detail) => {
                error!("pdf rendering failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal failure").into_response()
            }
            ApiError::InternalError(detail) => {
                error!("internal failure: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal failure").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_invalid_body_maps_to_400() {
        let response = ApiError::InvalidBody("missing divisionName".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_render_failure_maps_to_500() {
        let response = ApiError::RenderFailed("browser crashed".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let response = ApiError::InternalError("join error".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_wire_messages_are_generic() {
        let invalid = ApiError::InvalidBody("field detail".to_string()).into_response();
        let body = to_bytes(invalid.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"invalid request body");

        let failed = ApiError::RenderFailed("field detail".to_string()).into_response();
        let body = to_bytes(failed.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"internal failure");
    }
}
