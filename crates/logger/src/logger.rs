//! Core logger trait

use crate::{Level, Message, Result};

/// The contract every sink implements.
///
/// A sink guards its whole write path with one lock, so a single instance
/// may be shared freely between threads.
///
/// Using a sink after [`close`](Logger::close) is a misuse: every later
/// `write` and `close` returns [`Error::Closed`](crate::Error::Closed).
pub trait Logger: Send + Sync + 'static {
    /// Write a message if its level passes the threshold.
    fn write(&self, message: Message) -> Result<()>;

    /// Current output threshold
    fn level(&self) -> Level;

    /// Set the output threshold. Levels that are not valid thresholds are
    /// ignored.
    fn set_level(&self, level: Level);

    /// Set the prefix written before the level label. Empty disables it.
    fn set_prefix(&self, prefix: &str);

    /// Set the strftime-style timestamp format. Invalid formats are ignored.
    fn set_time_format(&self, format: &str);

    /// Flush pending output and release the underlying resource.
    fn close(&self) -> Result<()>;

    /// Check if a level passes the threshold
    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }
}

/// Extension trait for convenient logging methods
pub trait LoggerExt: Logger {
    /// Log at an explicit level
    #[inline]
    fn log(&self, level: Level, msg: impl Into<String>) -> Result<()> {
        self.write(Message::new(level, msg))
    }

    /// Log a fatal error
    #[inline]
    fn fatal(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Fatal, msg)
    }

    /// Log an error
    #[inline]
    fn error(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Error, msg)
    }

    /// Log a warning
    #[inline]
    fn warn(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Warn, msg)
    }

    /// Log info
    #[inline]
    fn info(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Info, msg)
    }

    /// Log debug
    #[inline]
    fn debug(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Debug, msg)
    }

    /// Log trace
    #[inline]
    fn trace(&self, msg: impl Into<String>) -> Result<()> {
        self.log(Level::Trace, msg)
    }
}

// Implement for all loggers
impl<T: Logger + ?Sized> LoggerExt for T {}
