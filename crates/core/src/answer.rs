//! The answer-matching rule used when a quiz is played.
//!
//! A submitted response matches the stored answer when both compare equal
//! after trimming leading/trailing whitespace and lowercasing. This is the
//! only comparison the application performs; there is no fuzzy matching.

/// Normalize a value for comparison: trim surrounding whitespace, lowercase.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Whether `response` counts as a correct guess for `answer`.
pub fn answers_match(answer: &str, response: &str) -> bool {
    normalize(answer) == normalize(response)
}
