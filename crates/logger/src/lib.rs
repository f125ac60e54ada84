//! Leveled logging with interchangeable output sinks.
//!
//! Every sink implements the [`Logger`] contract: a single `write` primitive
//! filtered by a severity threshold, plus setters for the threshold, line
//! prefix and timestamp format, and an explicit `close`. The
//! [`LoggerExt`] extension trait adds the per-level convenience methods.
//!
//! This crate ships the [`ConsoleLogger`] sink and the process-wide default
//! logger used by the [`info!`]-style macros. The rotating file sink lives in
//! `lumber-logger-file`.
//!
//! ```no_run
//! use lumber_logger::{ConsoleLogger, Level, Logger, LoggerExt};
//!
//! let logger = ConsoleLogger::new(Level::Debug);
//! logger.set_prefix("worker-1");
//! logger.info("started").ok();
//!
//! lumber_logger::info!("default logger says {}", 42);
//! ```

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod console;
mod default;
mod error;
mod format;
mod level;
mod logger;
mod macros;
mod message;

pub use console::ConsoleLogger;
pub use default::{init, log, logger, set_level, set_prefix, set_time_format};
pub use error::{Error, Result};
pub use format::{DEFAULT_TIME_FORMAT, Formatter};
pub use level::Level;
pub use logger::{Logger, LoggerExt};
pub use message::Message;
