//! Route definitions, grouped per entity.

pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Assemble all application routes.
pub fn app_routes() -> Router<AppState> {
    quizzes::router()
}
