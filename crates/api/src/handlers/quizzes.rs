//! Handlers for the quiz routes.
//!
//! Each handler performs one repository call and renders one view (or
//! issues a redirect). Failures are returned as [`AppError`] values and
//! funnel into the shared log-and-redirect path.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use quizdeck_core::answer::answers_match;
use quizdeck_core::types::DbId;
use quizdeck_db::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};
use quizdeck_db::repositories::QuizRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// Query parameters for the play form. `response` carries the previous
/// attempt and defaults to empty on a fresh visit.
#[derive(Debug, Deserialize)]
pub struct PlayParams {
    #[serde(default)]
    pub response: String,
}

/// Query parameters for the check route. `response` is required; a
/// missing value funnels into the shared error path.
#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub response: Option<String>,
}

/// Parse a path id, funneling non-numeric values into the error path
/// instead of letting the extractor reject them with a 400. Surrounding
/// whitespace is tolerated.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidId(raw.to_owned()))
}

/// Look up a quiz, mapping a missing row to [`AppError::NotFound`].
async fn find_quiz(state: &AppState, id: DbId) -> Result<Quiz, AppError> {
    QuizRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(id))
}

/// GET / and GET /quizzes
///
/// Render the full quiz list.
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let quizzes = QuizRepo::list(&state.pool).await?;
    Ok(Html(views::index(&quizzes)))
}

/// GET /quizzes/{id}/play
///
/// Render the play form for one quiz, prefilled with the prior response.
pub async fn play(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<PlayParams>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let quiz = find_quiz(&state, id).await?;
    Ok(Html(views::play(&quiz, &params.response)))
}

/// GET /quizzes/{id}/check
///
/// Compare the submitted response against the stored answer (trimmed,
/// case-insensitive) and render the verdict.
pub async fn check(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<CheckParams>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let response = params.response.ok_or(AppError::MissingResponse)?;
    let quiz = find_quiz(&state, id).await?;

    let msg = if answers_match(&quiz.answer, &response) {
        format!("Yes, \"{response}\" is the {}", quiz.question)
    } else {
        format!("No, \"{response}\" is not the {}", quiz.question)
    };

    Ok(Html(views::result(id, &msg, &response)))
}

/// GET /quizzes/new
///
/// Render the blank creation form.
pub async fn new_quiz() -> Html<String> {
    Html(views::new_quiz())
}

/// POST /quizzes
///
/// Insert a new quiz and redirect to the list.
pub async fn create(
    State(state): State<AppState>,
    Form(dto): Form<CreateQuiz>,
) -> AppResult<Redirect> {
    let quiz = QuizRepo::create(&state.pool, &dto).await?;
    tracing::info!(id = quiz.id, question = %quiz.question, "New quiz created");
    Ok(Redirect::to("/quizzes"))
}

/// GET /quizzes/{id}/edit
///
/// Render the edit form, prefilled with the quiz's current fields.
pub async fn edit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let quiz = find_quiz(&state, id).await?;
    Ok(Html(views::edit(&quiz)))
}

/// PUT /quizzes/{id}/update
///
/// Overwrite the question and answer of an existing quiz, then redirect
/// to the list. The id itself never changes.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(dto): Form<UpdateQuiz>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    let quiz = find_quiz(&state, id).await?;
    QuizRepo::update(&state.pool, quiz.id, &dto).await?;
    tracing::info!(id, "Quiz updated");
    Ok(Redirect::to("/quizzes"))
}

/// DELETE /quizzes/{id}
///
/// Remove a quiz and render the list of remaining quizzes.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let quiz = find_quiz(&state, id).await?;

    let removed = QuizRepo::delete(&state.pool, quiz.id).await?;
    if removed == 0 {
        return Err(AppError::NothingDeleted(id));
    }
    tracing::info!(id, "Quiz deleted");

    let quizzes = QuizRepo::list(&state.pool).await?;
    Ok(Html(views::index(&quizzes)))
}
