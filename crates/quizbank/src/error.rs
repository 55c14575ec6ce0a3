//! Error types for the quizbank library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quizbank operations.
///
/// Only failures that stop a conversion outright live here. Recoverable
/// input anomalies are reported as [`ConversionWarning`](crate::ConversionWarning)s.
#[derive(Debug, Error)]
pub enum QuizBankError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error reading from a caller-supplied stream.
    #[error("IO error: {0}")]
    Stream(#[from] std::io::Error),

    /// None of the candidate encodings could decode the input.
    #[error("Failed to read CSV file with any supported encoding (tried {})", .attempted.join(", "))]
    Decode { attempted: Vec<&'static str> },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),
}

impl QuizBankError {
    /// Wrap an IO error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this is a decode failure.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type alias for quizbank operations.
pub type Result<T> = std::result::Result<T, QuizBankError>;
