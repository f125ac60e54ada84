//! Opening log files and rotating them through a numbered backup chain.
//!
//! Backups live next to the live file as `<path>.<N>`, where `N` starts at 1
//! for the most recently rotated file and is zero padded to the number of
//! digits in `max_backups` so the names sort in numeric order. Rotation
//! first parks the live file under `<path>.rotating`, then shifts `<path>.N`
//! to `<path>.N+1` for every `N < max_backups`, walking from the highest `N`
//! down so no target is overwritten before it has been moved, and finally
//! moves the parked file to `<path>.1` and opens a fresh live file. If the
//! live file cannot be parked the chain is left untouched, and if a later
//! step fails the parked file is moved back.
//!
//! A live file that has disappeared (deleted or moved away by an operator)
//! is simply recreated; the chain is not shifted for it.
//!
//! Backups numbered above `max_backups` are never renamed or removed; they
//! are left behind as-is.

use crate::RotationConfig;
use crate::config::RotationMode;
use crate::error::RotationError;

use lumber_logger::{Error, Result};

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Open the live log file as `config.mode()` requires, returning the handle
/// and the number of complete lines it already holds.
///
/// Only `RotateOnLimit` tracks existing lines; every other mode starts the
/// count at 0. `BackupOnOpen` and `RotateOnLimit` may rotate before
/// returning, in which case the handle refers to a fresh empty file.
pub fn open_for_logging(config: &RotationConfig) -> Result<(File, u64)> {
    config.validate()?;

    let path = config.path();
    create_parent_dir(path)?;

    match config.mode() {
        RotationMode::Append => {
            let mut file = open_existing(path).map_err(|e| open_error(path, e))?;
            terminate_partial_line(&mut file).map_err(|e| open_error(path, e))?;
            Ok((file, 0))
        }
        RotationMode::Truncate => {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .map_err(|e| open_error(path, e))?;
            Ok((file, 0))
        }
        RotationMode::BackupOnOpen => match create_new(path) {
            Ok(file) => Ok((file, 0)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("Backing up existing log file {}", path.display());
                let file = rotate(path, config.max_backups())?;
                Ok((file, 0))
            }
            Err(e) => Err(open_error(path, e)),
        },
        RotationMode::RotateOnLimit => match create_new(path) {
            Ok(file) => Ok((file, 0)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                let mut file = open_existing(path).map_err(|e| open_error(path, e))?;
                let mut lines = count_lines(&mut file).map_err(|e| open_error(path, e))?;
                if terminate_partial_line(&mut file).map_err(|e| open_error(path, e))? {
                    lines += 1;
                }

                if should_rotate(lines, config) {
                    debug!(
                        "Existing log file {} holds {} lines (limit {}), rotating",
                        path.display(),
                        lines,
                        config.line_limit()
                    );
                    drop(file);
                    let file = rotate(path, config.max_backups())?;
                    Ok((file, 0))
                } else {
                    Ok((file, lines))
                }
            }
            Err(e) => Err(open_error(path, e)),
        },
    }
}

/// Whether a file holding `line_count` lines must be rotated before the next
/// write.
#[must_use]
pub fn should_rotate(line_count: u64, config: &RotationConfig) -> bool {
    config.mode() == RotationMode::RotateOnLimit && line_count >= config.line_limit()
}

/// Shift the backup chain, move the live file to `<path>.1` and open a fresh
/// live file for appending.
///
/// With `max_backups == 0` there is no chain: the live file still moves to
/// `<path>.1`, replacing any earlier one. A missing live file is recreated
/// without touching the chain.
pub fn rotate(path: &Path, max_backups: u32) -> std::result::Result<File, RotationError> {
    match fs::symlink_metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Log file {} is missing, recreating it", path.display());
            return open_append(path).map_err(|e| RotationError::new(path, e));
        }
        Err(e) => return Err(RotationError::new(path, e)),
    }

    let parked = parked_path(path);
    fs::rename(path, &parked).map_err(|e| RotationError::new(path, e))?;

    let first = backup_path(path, 1, max_backups);
    let moved = shift_chain(path, max_backups)
        .and_then(|()| fs::rename(&parked, &first).map_err(|e| RotationError::new(&first, e)));
    if let Err(e) = moved {
        if let Err(restore) = fs::rename(&parked, path) {
            warn!(
                "Failed to move {} back to {}: {restore}",
                parked.display(),
                path.display()
            );
        }
        return Err(e);
    }
    debug!("Rotated {} -> {}", path.display(), first.display());

    open_append(path).map_err(|e| RotationError::new(path, e))
}

fn shift_chain(path: &Path, max_backups: u32) -> std::result::Result<(), RotationError> {
    for n in (1..max_backups).rev() {
        let from = backup_path(path, n, max_backups);
        let to = backup_path(path, n + 1, max_backups);
        match fs::rename(&from, &to) {
            Ok(()) => debug!("Renamed {} -> {}", from.display(), to.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(RotationError::new(from, e)),
        }
    }
    Ok(())
}

fn parked_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".rotating");
    PathBuf::from(name)
}

/// Path of backup generation `n`, zero padded to the digit width of
/// `max_backups`.
#[must_use]
pub fn backup_path(path: &Path, n: u32, max_backups: u32) -> PathBuf {
    let width = max_backups.max(1).to_string().len();
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{n:0width$}"));
    PathBuf::from(name)
}

/// Count the complete (newline-terminated) lines readable from `reader`.
pub fn count_lines(reader: impl Read) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0;

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        lines += memchr::memchr_iter(b'\n', buf).count() as u64;
        let consumed = buf.len();
        reader.consume(consumed);
    }

    Ok(lines)
}

fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| open_error(parent, e))
        }
        _ => Ok(()),
    }
}

fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create_new(true).open(path)
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}

fn open_existing(path: &Path) -> io::Result<File> {
    OpenOptions::new().read(true).append(true).create(true).open(path)
}

/// End a trailing partial line left by an interrupted write so the next
/// record starts on its own line. Returns whether a newline was added.
fn terminate_partial_line(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    if last[0] == b'\n' {
        return Ok(false);
    }

    file.write_all(b"\n")?;
    Ok(true)
}

fn open_error(path: &Path, source: io::Error) -> Error {
    Error::Open {
        path: path.to_path_buf(),
        source,
    }
}
