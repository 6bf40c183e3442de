//! Error types for loading quizzes and running sessions.
//!
//! A deadline firing and an empty quiz are not errors; they are reported
//! through [`SessionOutcome`](crate::model::SessionOutcome) instead.

use thiserror::Error;

/// Errors that can occur while loading a quiz source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The quiz file could not be opened.
    #[error("failed to open quiz file {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be read, or is not valid comma-separated text.
    #[error("invalid CSV on line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A row did not contain exactly a question and an answer.
    #[error("malformed record on line {line}: expected 2 fields, found {fields}")]
    MalformedRecord { line: u64, fields: usize },
}

impl LoadError {
    /// The 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<u64> {
        match self {
            LoadError::Open { .. } => None,
            LoadError::Csv { line, .. } | LoadError::MalformedRecord { line, .. } => Some(*line),
        }
    }
}

/// Errors that abort a quiz session without producing a result.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The quiz could not be loaded, so no session ran.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The answer stream failed during the starting gate or a question.
    #[error("failed to read answer: {0}")]
    Input(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_message_names_the_line() {
        let err = LoadError::MalformedRecord { line: 3, fields: 3 };
        assert_eq!(
            err.to_string(),
            "malformed record on line 3: expected 2 fields, found 3"
        );
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn load_error_passes_through_session_error() {
        let err: SessionError = LoadError::MalformedRecord { line: 1, fields: 1 }.into();
        assert!(matches!(err, SessionError::Load(_)));
        assert!(err.to_string().contains("line 1"));
    }
}
