//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No persisted settings for the decorator.
    #[error("settings not found: {0}")]
    NotFound(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid path.
    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    /// Storage directory creation failed.
    #[error("failed to create storage directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Creates a NotFound error.
    pub fn not_found(fqn: impl Into<String>) -> Self {
        Self::NotFound(fqn.into())
    }

    /// Creates an InvalidPath error.
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Creates a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is a recoverable error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Io(_))
    }
}
