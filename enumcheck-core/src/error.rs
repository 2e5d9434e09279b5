//! Typed error handling for enumcheck.
//!
//! Structured errors library consumers can match on. Note that the
//! analysis core itself never errors: an unresolvable type or node
//! shape means the rule declines, not that the run fails. These
//! errors cover the surrounding machinery - I/O, document loading,
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for enumcheck operations.
#[derive(Error, Debug)]
pub enum EnumcheckError {
    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed analysis document
    #[error("Document error{}: {message}", fmt_doc_location(.path, .line, .column))]
    Document {
        path: Option<PathBuf>,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<usize>,
        /// Column number (1-indexed) if available
        column: Option<usize>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn fmt_doc_location(path: &Option<PathBuf>, line: &Option<usize>, column: &Option<usize>) -> String {
    let mut out = String::new();
    if let Some(p) = path {
        out.push_str(&format!(" in {}", p.display()));
    }
    if let (Some(l), Some(c)) = (line, column) {
        out.push_str(&format!(" at {l}:{c}"));
    }
    out
}

impl EnumcheckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a document error without location.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document {
            path: None,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Create a document error with line/column info.
    pub fn document_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Document {
            path: None,
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Attach a document path to a location-bearing error.
    pub fn with_document_path(self, p: impl Into<PathBuf>) -> Self {
        match self {
            Self::Document {
                message,
                line,
                column,
                ..
            } => Self::Document {
                path: Some(p.into()),
                message,
                line,
                column,
            },
            other => other,
        }
    }

    /// Check if this is a recoverable error (a run can skip the file
    /// and continue).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Document { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Document { path, .. } => path.as_ref(),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for enumcheck results.
pub type EnumcheckResult<T> = Result<T, EnumcheckError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> EnumcheckResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> EnumcheckResult<T> {
        self.map_err(|e| EnumcheckError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = EnumcheckError::io(
            PathBuf::from("/test/doc.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, EnumcheckError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/doc.json")));
        assert!(err.to_string().contains("/test/doc.json"));
    }

    #[test]
    fn test_document_error_with_location() {
        let err = EnumcheckError::document_at("unexpected token", 10, 5)
            .with_document_path("/docs/a.json");
        if let EnumcheckError::Document {
            line, column, path, ..
        } = &err
        {
            assert_eq!(*line, Some(10));
            assert_eq!(*column, Some(5));
            assert_eq!(path.as_deref(), Some(std::path::Path::new("/docs/a.json")));
        } else {
            panic!("Expected Document error");
        }
        assert!(err.to_string().contains("at 10:5"));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(EnumcheckError::document("bad json").is_recoverable());
        assert!(EnumcheckError::config("/x/enumcheck.toml", "bad").is_recoverable());
        assert!(!EnumcheckError::invalid_argument("nope").is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let converted = result.with_path("/missing/doc.json");
        assert!(converted.is_err());
    }
}
