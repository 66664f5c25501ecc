//! Domain logic shared across the quizdeck crates.
//!
//! Deliberately dependency-light: the answer-matching rule and the shared
//! ID type live here so both the persistence layer and the HTTP layer can
//! use them without pulling in each other.

pub mod answer;
pub mod types;
