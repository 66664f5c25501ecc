//! Repository for the `quizzes` table.
//!
//! Static async methods over a shared pool; no per-request transaction
//! scope. Conflicting writes are serialized by SQLite itself.

use quizdeck_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};

/// Column list for `quizzes` queries.
const COLUMNS: &str = "id, question, answer";

/// Provides data access for quizzes.
pub struct QuizRepo;

impl QuizRepo {
    /// List all quizzes, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes ORDER BY id");
        sqlx::query_as::<_, Quiz>(&query).fetch_all(pool).await
    }

    /// Look up a single quiz by primary key.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = ?");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new quiz and return the stored row (with its assigned id).
    pub async fn create(pool: &SqlitePool, dto: &CreateQuiz) -> Result<Quiz, sqlx::Error> {
        let query =
            format!("INSERT INTO quizzes (question, answer) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(&dto.question)
            .bind(&dto.answer)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the question and answer of an existing quiz.
    ///
    /// Returns the number of rows affected (0 when the id does not exist).
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        dto: &UpdateQuiz,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE quizzes SET question = ?, answer = ? WHERE id = ?")
            .bind(&dto.question)
            .bind(&dto.answer)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a quiz by id. Returns the number of rows affected.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Total number of quizzes in the table.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM quizzes")
            .fetch_one(pool)
            .await
    }

    /// Insert several quizzes in one transaction. Used by startup seeding.
    pub async fn insert_many(
        pool: &SqlitePool,
        quizzes: &[CreateQuiz],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;
        for dto in quizzes {
            sqlx::query("INSERT INTO quizzes (question, answer) VALUES (?, ?)")
                .bind(&dto.question)
                .bind(&dto.answer)
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }
        tx.commit().await?;
        Ok(inserted)
    }
}
