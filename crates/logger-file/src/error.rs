//! Error types for file-based logging

use std::io;
use std::path::PathBuf;

/// A failed step of the rotation sequence
#[derive(Debug, thiserror::Error)]
#[error("Failed to rotate log file {path}: {source}")]
pub struct RotationError {
    /// The file whose rename or reopen failed
    pub path: PathBuf,
    /// The underlying error
    #[source]
    pub source: io::Error,
}

impl RotationError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl From<RotationError> for lumber_logger::Error {
    fn from(e: RotationError) -> Self {
        Self::Rotation {
            path: e.path,
            source: e.source,
        }
    }
}
