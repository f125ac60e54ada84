//! Log message type

use crate::Level;

use chrono::{DateTime, Local};

/// A single log message. Created per call and consumed by the sink that
/// writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity
    pub level: Level,
    /// The rendered message text
    pub text: String,
    /// When the message was created
    pub timestamp: DateTime<Local>,
}

impl Message {
    /// Create a message stamped with the current local time
    #[inline]
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self::at(level, text, Local::now())
    }

    /// Create a message with an explicit timestamp
    #[inline]
    pub fn at(level: Level, text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            level,
            text: text.into(),
            timestamp,
        }
    }
}
