//! Line rendering

use crate::{Error, Message, Result};

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

/// Default timestamp format, e.g. `2024/01/15 14:30:45`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Renders messages as `<timestamp> [<prefix> ]<label> <text>\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    prefix: String,
    time_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Create a formatter with no prefix and the default time format
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Current prefix; empty means none
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current strftime-style time format
    #[must_use]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Set the prefix written between the timestamp and the level label
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Set the time format. Formats containing an unknown specifier are
    /// rejected and the previous format is kept.
    pub fn set_time_format(&mut self, format: &str) -> Result<()> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::InvalidTimeFormat(format.to_string()));
        }
        self.time_format = format.to_string();
        Ok(())
    }

    /// Render a message into a single terminated line
    #[must_use]
    pub fn render(&self, message: &Message) -> Vec<u8> {
        let mut line = String::with_capacity(
            self.time_format.len() + self.prefix.len() + message.text.len() + 16,
        );

        if write!(line, "{}", message.timestamp.format(&self.time_format)).is_err() {
            line.clear();
            let _ = write!(line, "{}", message.timestamp.format(DEFAULT_TIME_FORMAT));
        }
        if !self.prefix.is_empty() {
            line.push(' ');
            line.push_str(&self.prefix);
        }
        line.push(' ');
        line.push_str(message.level.label());
        line.push(' ');
        line.push_str(&message.text);
        if !message.text.ends_with('\n') {
            line.push('\n');
        }

        line.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    use chrono::{Local, TimeZone};

    fn message(level: Level, text: &str) -> Message {
        let timestamp = Local.with_ymd_and_hms(2024, 1, 15, 14, 30, 45).unwrap();
        Message::at(level, text, timestamp)
    }

    fn render(formatter: &Formatter, message: &Message) -> String {
        String::from_utf8(formatter.render(message)).unwrap()
    }

    #[test]
    fn test_default_layout() {
        let formatter = Formatter::new();
        assert_eq!(
            render(&formatter, &message(Level::Info, "hello")),
            "2024/01/15 14:30:45 INFO  hello\n"
        );
        assert_eq!(
            render(&formatter, &message(Level::Error, "boom")),
            "2024/01/15 14:30:45 ERROR boom\n"
        );
    }

    #[test]
    fn test_prefix() {
        let mut formatter = Formatter::new();
        formatter.set_prefix("api");
        assert_eq!(
            render(&formatter, &message(Level::Warn, "slow")),
            "2024/01/15 14:30:45 api WARN  slow\n"
        );
    }

    #[test]
    fn test_newline_never_doubled() {
        let formatter = Formatter::new();
        let line = render(&formatter, &message(Level::Debug, "already terminated\n"));
        assert!(line.ends_with("terminated\n"));
        assert!(!line.ends_with("\n\n"));
    }

    #[test]
    fn test_newline_always_present() {
        let formatter = Formatter::new();
        for text in ["plain", "", "two\nlines"] {
            let line = render(&formatter, &message(Level::Trace, text));
            assert!(line.ends_with('\n'));
            assert!(!line.ends_with("\n\n"));
        }
    }

    #[test]
    fn test_time_format() {
        let mut formatter = Formatter::new();
        formatter.set_time_format("%H:%M").unwrap();
        assert_eq!(
            render(&formatter, &message(Level::Fatal, "x")),
            "14:30 FATAL x\n"
        );
    }

    #[test]
    fn test_invalid_time_format_rejected() {
        let mut formatter = Formatter::new();
        assert!(matches!(
            formatter.set_time_format("%Y/%m/%"),
            Err(Error::InvalidTimeFormat(_))
        ));
        assert_eq!(formatter.time_format(), DEFAULT_TIME_FORMAT);
    }
}
