use axum::response::{IntoResponse, Redirect, Response};
use quizdeck_core::types::DbId;

/// Application-level error type for HTTP handlers.
///
/// Every handler failure funnels through one place: implementing
/// [`IntoResponse`] here logs the error server-side and redirects the
/// browser to the quiz list. Business errors never surface a 4xx/5xx to
/// the client; only unmatched routes do (see the router fallback).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A path id parameter that does not parse as an integer.
    #[error("\"{0}\" should be number.")]
    InvalidId(String),

    /// No quiz exists with the requested id.
    #[error("Quiz {0} not found.")]
    NotFound(DbId),

    /// The check route was called without a `response` query parameter.
    #[error("Missing \"response\" query parameter.")]
    MissingResponse,

    /// A delete matched the quiz on lookup but removed zero rows.
    #[error("Quiz {0} not in DB.")]
    NothingDeleted(DbId),

    /// A database error from sqlx, propagated unchanged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed, redirecting to quiz list");
        Redirect::to("/").into_response()
    }
}
