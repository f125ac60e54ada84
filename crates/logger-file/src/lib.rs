//! File-based logger with line-count rotation and numbered backups
//!
//! This crate provides a [`FileLogger`] sink for `lumber-logger` that supports:
//! - Appending to or truncating an existing log on open
//! - Moving an existing log into a numbered backup on open
//! - Rotating the live file once it holds a configured number of lines
//! - A bounded chain of backups (`app.log.1` is the newest)
//!
//! ```no_run
//! use lumber_logger::{Level, Logger, LoggerExt};
//! use lumber_logger_file::{FileLogger, RotationConfig, RotationMode};
//!
//! let config = RotationConfig::builder("/var/log/app.log")
//!     .mode(RotationMode::RotateOnLimit)
//!     .line_limit(10_000)
//!     .max_backups(5)
//!     .build()?;
//!
//! let logger = FileLogger::open(config, Level::Info)?;
//! logger.info("service started")?;
//! logger.close()?;
//! # Ok::<(), lumber_logger::Error>(())
//! ```

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod config;
mod error;
pub mod rotation;
mod writer;

pub use config::{RotationConfig, RotationConfigBuilder, RotationMode};
pub use error::RotationError;
pub use lumber_logger::{Error, Result};
pub use writer::FileLogger;
