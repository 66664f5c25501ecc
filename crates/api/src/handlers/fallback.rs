use axum::http::StatusCode;

/// Catch-all for unmatched paths and unsupported methods.
///
/// Unlike business errors (which funnel through `AppError` into a
/// redirect), unknown routes answer with a plain 404 and a fixed body.
pub async fn not_found() -> (StatusCode, &'static str) {
    (
        StatusCode::NOT_FOUND,
        "Error: resource not found or method not supported.",
    )
}
