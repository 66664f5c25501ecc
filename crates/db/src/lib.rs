//! Persistence layer for the quizdeck server.
//!
//! Owns pool construction, embedded migrations, the startup health check,
//! and the one-time seeding step. Row structs and DTOs live in [`models`],
//! data access in [`repositories`].

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

use models::quiz::CreateQuiz;
use repositories::QuizRepo;

/// Convenience alias so downstream crates don't spell out the driver.
pub type DbPool = sqlx::SqlitePool;

/// The rows inserted when the store is empty at startup.
const DEFAULT_QUIZZES: &[(&str, &str)] = &[
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Create a SQLite connection pool for `database_url`.
///
/// The database file is created if it does not exist yet, so a fresh
/// checkout starts up without any manual setup.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Seed the four default quizzes if the table is empty.
///
/// Idempotent: gated on a row count, so restarting against a populated
/// store never inserts anything. Returns the number of rows inserted.
pub async fn seed_default_quizzes(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let count = QuizRepo::count(pool).await?;
    if count > 0 {
        tracing::info!(count, "Quiz table already populated, skipping seed");
        return Ok(0);
    }

    let defaults: Vec<CreateQuiz> = DEFAULT_QUIZZES
        .iter()
        .map(|(question, answer)| CreateQuiz {
            question: (*question).to_string(),
            answer: (*answer).to_string(),
        })
        .collect();

    let inserted = QuizRepo::insert_many(pool, &defaults).await?;
    tracing::info!(inserted, "Seeded default quizzes");
    Ok(inserted)
}
