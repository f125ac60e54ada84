//! Error types shared by every sink

use std::io;
use std::path::PathBuf;

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening, writing to, or closing a logger
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid combination of sink parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to create, open or truncate the log file
    #[error("Failed to open log file {path}: {source}")]
    Open {
        /// The file that could not be opened
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed while renaming the backup chain or reopening the live file
    #[error("Failed to rotate log file {path}: {source}")]
    Rotation {
        /// The file being rotated when the failure occurred
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to write a rendered message
    #[error("Failed to write log message: {0}")]
    Write(#[source] io::Error),

    /// Failed to sync or release the output on close
    #[error("Failed to close log: {0}")]
    Close(#[source] io::Error),

    /// The logger was used after `close`
    #[error("Logger is closed")]
    Closed,

    /// A default logger was already installed or created
    #[error("Default logger already initialized")]
    AlreadyInitialized,

    /// A level name did not match any known level
    #[error("Unknown log level: {0:?}")]
    UnknownLevel(String),

    /// A timestamp format string contained an invalid specifier
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),
}
