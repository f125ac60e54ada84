//! Console sink

use crate::{Error, Formatter, Level, Logger, Message, Result};

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;
use tracing::warn;

/// Text of the lifecycle line written when a console logger is closed.
const CLOSING_MESSAGE: &str = "Closing log now";

/// Logger that writes straight to standard output, or to any writer supplied
/// with [`ConsoleLogger::with_writer`].
pub struct ConsoleLogger {
    inner: Mutex<Inner>,
}

struct Inner {
    /// `None` once closed
    out: Option<Box<dyn Write + Send>>,
    level: Level,
    formatter: Formatter,
}

impl ConsoleLogger {
    /// Create a logger writing to stdout with the given threshold.
    /// `Level::Log` is not a threshold and falls back to `Level::Info`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::with_writer(std::io::stdout(), level)
    }

    /// Create a logger writing to an arbitrary writer
    pub fn with_writer(writer: impl Write + Send + 'static, level: Level) -> Self {
        let level = if level.is_threshold() {
            level
        } else {
            Level::Info
        };

        Self {
            inner: Mutex::new(Inner {
                out: Some(Box::new(writer)),
                level,
                formatter: Formatter::new(),
            }),
        }
    }

    /// Current prefix
    #[must_use]
    pub fn prefix(&self) -> String {
        self.inner.lock().formatter.prefix().to_string()
    }

    /// Current time format
    #[must_use]
    pub fn time_format(&self) -> String {
        self.inner.lock().formatter.time_format().to_string()
    }
}

impl Inner {
    fn emit(&mut self, message: &Message) -> Result<()> {
        let line = self.formatter.render(message);
        let out = self.out.as_mut().ok_or(Error::Closed)?;
        out.write_all(&line).map_err(Error::Write)?;
        out.flush().map_err(Error::Write)
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ConsoleLogger")
            .field("level", &inner.level)
            .field("formatter", &inner.formatter)
            .field("closed", &inner.out.is_none())
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn write(&self, message: Message) -> Result<()> {
        let mut inner = self.inner.lock();
        if message.level < inner.level {
            return Ok(());
        }
        inner.emit(&message)
    }

    fn level(&self) -> Level {
        self.inner.lock().level
    }

    fn set_level(&self, level: Level) {
        if level.is_threshold() {
            self.inner.lock().level = level;
        } else {
            warn!("Ignoring non-threshold level {level}");
        }
    }

    fn set_prefix(&self, prefix: &str) {
        self.inner.lock().formatter.set_prefix(prefix);
    }

    fn set_time_format(&self, format: &str) {
        if let Err(e) = self.inner.lock().formatter.set_time_format(format) {
            warn!("{e}");
        }
    }

    fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.out.is_none() {
            return Err(Error::Closed);
        }

        let result = inner.emit(&Message::new(Level::Log, CLOSING_MESSAGE));
        inner.out = None;

        result.map_err(|e| match e {
            Error::Write(source) => Error::Close(source),
            other => other,
        })
    }
}
