pub mod fallback;
pub mod quizzes;
