/*
 * Responsibility
 * - AppError shared by every posts handler
 * - IntoResponse impl (HTTP status / plain-text body)
 * - map axum path rejections into AppError
 */
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ID could not be converted to integer")]
    InvalidIdentifier,
    #[error("No post found with specified ID")]
    NotFound,
    #[error("Request body could not be decoded: {0}")]
    MalformedBody(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");

        // (StatusCode, String) → text/plain; charset=utf-8
        (status, self.to_string()).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::InvalidIdentifier
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn not_found_is_plain_text_404() {
        let res = AppError::NotFound.into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["content-type"], "text/plain; charset=utf-8");

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"No post found with specified ID");
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(AppError::InvalidIdentifier.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MalformedBody("expected value".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn malformed_body_message_includes_detail() {
        let err = AppError::MalformedBody("trailing characters".into());
        assert_eq!(
            err.to_string(),
            "Request body could not be decoded: trailing characters"
        );
    }
}
