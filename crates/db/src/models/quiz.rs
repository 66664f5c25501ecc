//! Quiz row struct and request DTOs.

use quizdeck_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `quizzes` table.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Quiz {
    pub id: DbId,
    pub question: String,
    pub answer: String,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a quiz. Submitted as an urlencoded form body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuiz {
    pub question: String,
    pub answer: String,
}

/// DTO for updating a quiz. Only `question` and `answer` are mutable;
/// the id is taken from the path and never changes.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuiz {
    pub question: String,
    pub answer: String,
}
