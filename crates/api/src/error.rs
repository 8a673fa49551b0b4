use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cafedex_core::error::CoreError;
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain outcomes and adds storage-fault
/// classification. Implements [`IntoResponse`] to produce the fixed JSON
/// failure bodies of the public contract, so `DuplicateKey`, `NotFound`,
/// and `Unauthorized` are never conflated with the generic fault path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level outcome from `cafedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    json!({"error": {"Not Found":
                        "Sorry, a cafe with that id was not found in the database"}}),
                ),
                CoreError::Duplicate { .. } => (
                    StatusCode::CONFLICT,
                    json!({"error": {"Failed": "Cafe is Already Stored"}}),
                ),
                CoreError::EmptyCollection { .. } => (
                    StatusCode::NOT_FOUND,
                    json!({"error": {"Not Found":
                        "Sorry, there are no cafes in the database yet"}}),
                ),
                CoreError::Unauthorized(msg) => (StatusCode::FORBIDDEN, json!({"error": msg})),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, json!({"error": {"Validation": msg}}))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error_body()
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - Unique constraint violations map to the 409 duplicate outcome
///   (the only unique column on `cafes` is `name`).
/// - `RowNotFound` maps to 404.
/// - Everything else is a genuine storage fault: logged, then returned
///   as a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            json!({"error": {"Not Found":
                "Sorry, a cafe with that id was not found in the database"}}),
        ),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => (
            StatusCode::CONFLICT,
            json!({"error": {"Failed": "Cafe is Already Stored"}}),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error_body()
        }
    }
}

fn internal_error_body() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "An internal error occurred"}),
    )
}

/// True when a sqlx error is the engine rejecting a duplicate unique
/// value (the only unique column on `cafes` is `name`).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
