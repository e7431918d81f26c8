//! Error types for the text filters.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for filter operations.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Standard input closed before a line could be read.
    #[error("no input available: end of stream reached before any line was read")]
    NoInput,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A denylist file could not be read.
    #[error("failed to read denylist {path}: {source}")]
    Denylist {
        /// The word-list file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A denylist file contained no words.
    #[error("denylist {0} contains no words")]
    EmptyDenylist(PathBuf),

    /// The palindrome marker is unusable.
    #[error("invalid marker {0:?}: must be non-empty and contain no whitespace")]
    InvalidMarker(String),
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_message() {
        let msg = FilterError::NoInput.to_string();
        assert!(msg.starts_with("no input available"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FilterError = io.into();
        assert!(matches!(err, FilterError::Io(_)));
    }
}
