//! Error types for linealign.
//!
//! The alignment engine itself is total and never fails. Errors only come
//! from the comparison helpers (file access, failed equivalence assertions)
//! and from config validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the comparison helpers.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A compared file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Two texts were not equivalent under the configured policies
    #[error("texts are not equivalent:\n{transcript}")]
    NotEquivalent {
        /// Full line-numbered transcript of the comparison
        transcript: String,
    },

    /// Alignment configuration is out of range
    #[error("invalid alignment config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for comparison helpers.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    /// Create an I/O error tagged with the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a config error with a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// The rendered transcript, if this is an equivalence failure.
    pub fn transcript(&self) -> Option<&str> {
        match self {
            Self::NotEquivalent { transcript } => Some(transcript),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::invalid_config("replace threshold must be finite");
        assert_eq!(
            err.to_string(),
            "invalid alignment config: replace threshold must be finite"
        );

        let err = DiffError::NotEquivalent {
            transcript: "   1      (-) a\n".to_string(),
        };
        assert!(err.to_string().starts_with("texts are not equivalent:\n"));
        assert_eq!(err.transcript(), Some("   1      (-) a\n"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = DiffError::io("expected/out.txt", source);
        assert!(err.to_string().contains("expected/out.txt"));
        assert!(err.transcript().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiffError>();
    }
}
