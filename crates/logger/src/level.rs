//! Severity levels

use crate::Error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered message severity. Comparison follows declaration order, so
/// `Level::Trace < Level::Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Finest-grained diagnostics
    Trace,
    /// Debugging information
    Debug,
    /// Normal operational messages
    Info,
    /// Something unexpected that the program recovered from
    Warn,
    /// A failed operation
    Error,
    /// An unrecoverable failure
    Fatal,
    /// Lifecycle messages emitted by the sinks themselves. Never filtered and
    /// never accepted as a threshold.
    Log,
}

impl Level {
    /// The six caller-facing severities in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
    ];

    /// Fixed-width label used in rendered lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warn => "WARN ",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Log => "*LOG*",
        }
    }

    /// Unpadded level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Log => "*LOG*",
        }
    }

    /// Whether this level may be used as an output threshold.
    #[must_use]
    pub const fn is_threshold(self) -> bool {
        !matches!(self, Self::Log)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::Log,
        ]
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Level::Fatal < Level::Log);
    }

    #[test]
    fn test_labels_are_fixed_width() {
        for level in Level::ALL {
            assert_eq!(level.label().len(), 5);
            assert_eq!(level.label().trim_end(), level.as_str());
        }
        assert_eq!(Level::Log.label(), "*LOG*");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" INFO ".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Fatal".parse::<Level>().unwrap(), Level::Fatal);
        assert_eq!("*log*".parse::<Level>().unwrap(), Level::Log);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::UnknownLevel(ref name) if name == "verbose"));
    }

    #[test]
    fn test_threshold() {
        assert!(Level::ALL.iter().all(|level| level.is_threshold()));
        assert!(!Level::Log.is_threshold());
    }
}
