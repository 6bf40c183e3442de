//! Answer comparison.

/// Compare a submitted answer with the expected one.
///
/// Both sides are trimmed, then compared without regard to case. An empty
/// answer is an ordinary string and only matches an empty expected answer.
pub fn matches(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}
