//! File sink

use crate::RotationConfig;
use crate::rotation::{self, open_for_logging, should_rotate};

use lumber_logger::{Error, Formatter, Level, Logger, Message, Result};

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;
use tracing::{debug, warn};

/// Logger writing to a file, optionally rotating it by line count.
///
/// Every write passing the threshold adds exactly one to the line count,
/// even when the message text spans several lines. In `RotateOnLimit` mode
/// the file is rotated before the write that would exceed the limit.
///
/// If a rotation fails the logger keeps writing to the file it already has
/// and records the failure there as an `ERROR` line, which also counts
/// towards the limit. The next write tries to rotate again.
pub struct FileLogger {
    config: RotationConfig,
    inner: Mutex<Inner>,
}

struct Inner {
    /// `None` once closed
    file: Option<File>,
    line_count: u64,
    level: Level,
    formatter: Formatter,
}

impl FileLogger {
    /// Open the log file described by `config` with the given threshold.
    ///
    /// Depending on the mode this may rotate an existing file before any
    /// message is written.
    pub fn open(config: RotationConfig, level: Level) -> Result<Self> {
        if !level.is_threshold() {
            return Err(Error::Configuration(format!(
                "{level} is not a valid threshold"
            )));
        }

        let (file, line_count) = open_for_logging(&config)?;
        debug!(
            "Opened log file {} ({:?}, {} existing lines)",
            config.path().display(),
            config.mode(),
            line_count
        );

        Ok(Self {
            config,
            inner: Mutex::new(Inner {
                file: Some(file),
                line_count,
                level,
                formatter: Formatter::new(),
            }),
        })
    }

    /// Lines written to the live file since it was opened or last rotated,
    /// plus any it already held when opened in `RotateOnLimit` mode
    #[must_use]
    pub fn line_count(&self) -> u64 {
        self.inner.lock().line_count
    }

    /// Path of the live log file
    #[must_use]
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// The configuration this logger was opened with
    #[must_use]
    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }
}

impl Inner {
    fn emit(&mut self, message: &Message) -> Result<()> {
        let line = self.formatter.render(message);
        let file = self.file.as_mut().ok_or(Error::Closed)?;
        file.write_all(&line).map_err(Error::Write)?;
        self.line_count += 1;
        Ok(())
    }

    fn rotate(&mut self, config: &RotationConfig) {
        match rotation::rotate(config.path(), config.max_backups()) {
            Ok(fresh) => {
                if let Some(retired) = self.file.replace(fresh) {
                    if let Err(e) = retired.sync_all() {
                        warn!("Failed to sync rotated log file: {e}");
                    }
                }
                debug!(
                    "Rotated {} after {} lines",
                    config.path().display(),
                    self.line_count
                );
                self.line_count = 0;
            }
            Err(e) => {
                warn!("{e}");
                let notice = Message::new(Level::Error, e.to_string());
                if let Err(e) = self.emit(&notice) {
                    warn!("Failed to record rotation failure: {e}");
                }
            }
        }
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("FileLogger")
            .field("config", &self.config)
            .field("line_count", &inner.line_count)
            .field("level", &inner.level)
            .field("formatter", &inner.formatter)
            .field("closed", &inner.file.is_none())
            .finish()
    }
}

impl Logger for FileLogger {
    fn write(&self, message: Message) -> Result<()> {
        let mut inner = self.inner.lock();
        if message.level < inner.level {
            return Ok(());
        }
        if inner.file.is_none() {
            return Err(Error::Closed);
        }

        if should_rotate(inner.line_count, &self.config) {
            inner.rotate(&self.config);
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
        let file = inner.file.take().ok_or(Error::Closed)?;

        // Dropping the handle releases it even when the sync failed
        let synced = file.sync_all();
        drop(file);
        debug!("Closed log file {}", self.config.path().display());

        synced.map_err(Error::Close)
    }
}
