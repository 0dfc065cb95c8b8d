//! Error types for Lectern operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Lectern crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Lectern operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error without path context.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file or directory.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Parse error (registry files, frontmatter).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Wrap a bare I/O error.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(err)
    }

    /// Wrap an I/O error with the path that caused it.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// True for errors that mean "the thing asked for does not exist".
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) | Self::IoPath { source: e, .. } => {
                e.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Result type alias using Lectern's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("bad port").to_string(),
            "Configuration error: bad port"
        );
        assert_eq!(Error::not_found("git.md").to_string(), "Not found: git.md");
        assert_eq!(Error::parse("line 3").to_string(), "Parse error: line 3");
    }

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/srv/content/git.md",
        );
        let msg = err.to_string();
        assert!(msg.contains("/srv/content/git.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        assert!(
            Error::io_with_path(
                std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                "/nope"
            )
            .is_not_found()
        );
        assert!(!Error::config("x").is_not_found());
        assert!(!Error::io(std::io::Error::other("boom")).is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let err: Error = std::io::Error::other("boom").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
