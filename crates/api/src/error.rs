use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// The one server-error body the contact endpoint ever returns. Internal
/// detail stays in the logs; the client only learns that the message was
/// not sent.
const SERVER_ERROR_MESSAGE: &str = "Failed to send message";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the service's literal JSON
/// error bodies: `{"error": "..."}` with a 4xx status for rejected input
/// and a 5xx status with a fixed message for everything else.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
