//! Route definitions for the quiz pages.
//!
//! ```text
//! GET    /                     -> list
//! GET    /quizzes              -> list
//! POST   /quizzes              -> create
//! GET    /quizzes/new          -> new_quiz
//! GET    /quizzes/{id}/play    -> play
//! GET    /quizzes/{id}/check   -> check
//! GET    /quizzes/{id}/edit    -> edit
//! PUT    /quizzes/{id}/update  -> update
//! DELETE /quizzes/{id}         -> delete
//! ```
//!
//! PUT and DELETE are reachable from plain browser forms through the
//! `_method` query override (see `middleware::method_override`).

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quizzes::list))
        .route("/quizzes", get(quizzes::list).post(quizzes::create))
        .route("/quizzes/new", get(quizzes::new_quiz))
        .route("/quizzes/{id}/play", get(quizzes::play))
        .route("/quizzes/{id}/check", get(quizzes::check))
        .route("/quizzes/{id}/edit", get(quizzes::edit))
        .route("/quizzes/{id}/update", put(quizzes::update))
        .route("/quizzes/{id}", delete(quizzes::delete))
}
