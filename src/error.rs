//! Error handling for archive operations.
//!
//! Every fallible archive call returns a tagged [`ArchiveError`] so the HTTP
//! boundary can tell "resource absent" apart from "resource broken".

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Path could not be listed or read
    #[error("Not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Content failed to parse structurally
    #[error("Malformed payments table in {path}: {message}")]
    Malformed {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Unexpected filesystem failure
    #[error("I/O error: {message}")]
    Internal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ArchiveError {
    /// Create a not found error without an underlying I/O cause
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a not found error carrying the failed I/O operation
    pub fn not_found_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a malformed content error
    pub fn malformed(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an internal I/O error with context
    pub fn internal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Internal {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Classify an I/O failure on `path`: a missing path is `NotFound`,
    /// anything else is `Internal`.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found_io(path, source)
        } else {
            Self::internal(format!("failed to access {}", path.display()), source)
        }
    }

    /// Whether this error means the requested resource is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Attach the file path to a malformed error raised without one
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Malformed {
                message, source, ..
            } => Self::Malformed {
                path: file.to_path_buf(),
                message,
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
