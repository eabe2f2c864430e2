use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskrun_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskrun_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A lookup with no results, or an id that cannot name any entity.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify into an HTTP status, error code, and client-facing message.
    ///
    /// Internal details are logged here and replaced with a generic message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidCommand { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_COMMAND", core.to_string())
                }
                CoreError::Execution(err) => {
                    tracing::error!(error = %err, "Command execution failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "EXECUTION_FAILED",
                        err.to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        error_response(status, code, message)
    }
}

/// Error response for `PUT /tasks/{id}/execute`.
///
/// Every failure on that endpoint is reported as 500 with the message
/// `"Execution error: <cause>"`. The `code` field still carries the
/// underlying classification (`NOT_FOUND`, `EXECUTION_FAILED`, ...).
#[derive(Debug)]
pub struct ExecutionFailure(pub AppError);

impl From<AppError> for ExecutionFailure {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ExecutionFailure {
    fn into_response(self) -> Response {
        let (_, code, cause) = self.0.classify();
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            code,
            format!("Execution error: {cause}"),
        )
    }
}

fn error_response(status: StatusCode, code: &'static str, message: String) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });

    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
