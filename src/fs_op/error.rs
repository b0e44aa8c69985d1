use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by `PathHandle` operations.
#[derive(Error, Debug)]
pub enum PathError {
    /// The path does not resolve to anything on disk.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Destination collision while `overwrite` is false.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The operation needs a directory but the path is something else.
    #[error("not a directory: {}", .0.display())]
    NotDirectory(PathBuf),

    /// `find_files` was given a pattern the regex engine rejects.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Any other OS-level failure, passed through as-is.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PathError {
    /// Map an `io::Error` from a query against `path`, turning the OS
    /// not-found kind into `NotFound` so callers can match on it.
    pub(crate) fn from_io(path: impl Into<PathBuf>, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            PathError::NotFound(path.into())
        } else {
            PathError::Io(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, PathError>;
