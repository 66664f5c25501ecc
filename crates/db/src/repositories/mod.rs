pub mod quiz_repo;

pub use quiz_repo::QuizRepo;
