use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Validation failures never pass through here; they are part of the
/// success-path response envelope. What remains is the not-found
/// contract and genuine store failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing row or unparsable identifier on a path that answers
    /// with a bare 404.
    #[error("not found")]
    NotFound,

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The status is the whole contract; no body.
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let body = json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
