//! Process-wide default logger and the functions that forward to it

use crate::{ConsoleLogger, Error, Level, Logger, Message, Result};

use std::sync::{Arc, OnceLock};

static DEFAULT: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Install the default logger.
///
/// Must run before anything logs through the default logger; afterwards the
/// default is fixed and this returns [`Error::AlreadyInitialized`].
pub fn init(logger: Arc<dyn Logger>) -> Result<()> {
    DEFAULT.set(logger).map_err(|_| Error::AlreadyInitialized)
}

/// The default logger, created on first use as a stdout
/// [`ConsoleLogger`] at `Level::Info` unless [`init`] installed another.
///
/// Components that want to stay testable should take the returned handle as
/// a parameter rather than calling the free functions.
pub fn logger() -> Arc<dyn Logger> {
    DEFAULT
        .get_or_init(|| Arc::new(ConsoleLogger::new(Level::Info)))
        .clone()
}

/// Set the output threshold of the default logger
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Set the prefix of the default logger
pub fn set_prefix(prefix: &str) {
    logger().set_prefix(prefix);
}

/// Set the time format of the default logger
pub fn set_time_format(format: &str) {
    logger().set_time_format(format);
}

/// Write to the default logger at an explicit level.
///
/// Failures cannot be returned through the logging macros, so they are
/// reported on stderr instead.
pub fn log(level: Level, text: impl Into<String>) {
    if let Err(e) = logger().write(Message::new(level, text)) {
        eprintln!("lumber: {e}");
    }
}
