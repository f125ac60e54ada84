//! Rotation configuration

use lumber_logger::{Error, Result};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How the log file is opened and when it is rotated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationMode {
    /// Open or create the file and append to it. Never rotates.
    Append,
    /// Create the file or truncate it to empty. Never rotates.
    Truncate,
    /// Move an existing file into the backup chain before opening a fresh
    /// one. Never rotates while running.
    BackupOnOpen,
    /// Keep appending to the existing file, rotating whenever it holds
    /// `line_limit` lines.
    RotateOnLimit,
}

/// Validated settings for a [`FileLogger`](crate::FileLogger)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    path: PathBuf,
    line_limit: u64,
    max_backups: u32,
    mode: RotationMode,
}

impl RotationConfig {
    /// Start building a config for the given log path. Defaults to
    /// [`RotationMode::Append`] with no limit and no backups.
    pub fn builder(path: impl Into<PathBuf>) -> RotationConfigBuilder {
        RotationConfigBuilder {
            path: path.into(),
            line_limit: 0,
            max_backups: 0,
            mode: RotationMode::Append,
        }
    }

    /// Path of the live log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines after which the live file is rotated; 0 disables the limit
    #[must_use]
    pub const fn line_limit(&self) -> u64 {
        self.line_limit
    }

    /// Number of numbered backups retained
    #[must_use]
    pub const fn max_backups(&self) -> u32 {
        self.max_backups
    }

    /// Open/rotation mode
    #[must_use]
    pub const fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Reject parameter combinations the mode cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Configuration("log path is empty".to_string()));
        }

        match self.mode {
            RotationMode::Append | RotationMode::Truncate => {
                if self.line_limit > 0 || self.max_backups > 0 {
                    return Err(Error::Configuration(format!(
                        "{:?} mode does not rotate (line_limit = {}, max_backups = {})",
                        self.mode, self.line_limit, self.max_backups
                    )));
                }
            }
            RotationMode::BackupOnOpen => {
                if self.line_limit > 0 {
                    return Err(Error::Configuration(format!(
                        "BackupOnOpen mode does not use a line limit (line_limit = {})",
                        self.line_limit
                    )));
                }
            }
            RotationMode::RotateOnLimit => {
                if self.line_limit == 0 {
                    return Err(Error::Configuration(
                        "RotateOnLimit mode requires a positive line_limit".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Builder for [`RotationConfig`]
#[derive(Debug, Clone)]
pub struct RotationConfigBuilder {
    path: PathBuf,
    line_limit: u64,
    max_backups: u32,
    mode: RotationMode,
}

impl RotationConfigBuilder {
    /// Set the open/rotation mode
    #[must_use]
    pub const fn mode(mut self, mode: RotationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the line limit (`RotateOnLimit` only)
    #[must_use]
    pub const fn line_limit(mut self, lines: u64) -> Self {
        self.line_limit = lines;
        self
    }

    /// Set how many numbered backups are kept (`BackupOnOpen` and
    /// `RotateOnLimit` only)
    #[must_use]
    pub const fn max_backups(mut self, backups: u32) -> Self {
        self.max_backups = backups;
        self
    }

    /// Validate and build the config
    pub fn build(self) -> Result<RotationConfig> {
        let config = RotationConfig {
            path: self.path,
            line_limit: self.line_limit,
            max_backups: self.max_backups,
            mode: self.mode,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(mode: RotationMode, line_limit: u64, max_backups: u32) -> Result<RotationConfig> {
        RotationConfig::builder("app.log")
            .mode(mode)
            .line_limit(line_limit)
            .max_backups(max_backups)
            .build()
    }

    #[test]
    fn test_defaults() {
        let config = RotationConfig::builder("app.log").build().unwrap();
        assert_eq!(config.mode(), RotationMode::Append);
        assert_eq!(config.line_limit(), 0);
        assert_eq!(config.max_backups(), 0);
        assert_eq!(config.path(), Path::new("app.log"));
    }

    #[test]
    fn test_valid_combinations() {
        assert!(build(RotationMode::Append, 0, 0).is_ok());
        assert!(build(RotationMode::Truncate, 0, 0).is_ok());
        assert!(build(RotationMode::BackupOnOpen, 0, 0).is_ok());
        assert!(build(RotationMode::BackupOnOpen, 0, 3).is_ok());
        assert!(build(RotationMode::RotateOnLimit, 5, 0).is_ok());
        assert!(build(RotationMode::RotateOnLimit, 5, 3).is_ok());
    }

    #[test]
    fn test_rejected_combinations() {
        for (mode, line_limit, max_backups) in [
            (RotationMode::Append, 0, 2),
            (RotationMode::Append, 10, 0),
            (RotationMode::Truncate, 0, 1),
            (RotationMode::Truncate, 10, 0),
            (RotationMode::BackupOnOpen, 10, 2),
            (RotationMode::RotateOnLimit, 0, 2),
        ] {
            let result = build(mode, line_limit, max_backups);
            assert!(
                matches!(result, Err(Error::Configuration(_))),
                "{mode:?} line_limit={line_limit} max_backups={max_backups} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = RotationConfig::builder("").build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
