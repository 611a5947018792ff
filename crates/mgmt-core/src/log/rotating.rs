//! Size-bounded log file with numbered backups.
//!
//! The active file is `<name>.log`; backups are `<name>.log.1` (newest)
//! through `<name>.log.<backup_count>` (oldest). Rotation bookkeeping lives in
//! memory, so a path must be owned by exactly one sink in one process.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mgmt_types::identifiers::LOG_SUFFIX;
use mgmt_types::{FileSinkConfig, Sink, SinkError, SinkKind};
use tracing::{debug, warn};

use crate::util::fs::absolutize;

/// Normalize a destination: absolute, with the `.log` suffix appended once.
pub fn log_file_path(path: impl AsRef<Path>) -> io::Result<PathBuf> {
    let path = absolutize(path)?;
    let has_suffix = path
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(LOG_SUFFIX))
        .unwrap_or(false);

    if has_suffix {
        Ok(path)
    } else {
        let mut raw = path.into_os_string();
        raw.push(LOG_SUFFIX);
        Ok(PathBuf::from(raw))
    }
}

/// A file sink that rotates once the active file reaches `max_bytes`.
pub struct RotatingFileSink {
    path: PathBuf,
    file: Option<File>,
    size: u64,
    config: FileSinkConfig,
}

impl RotatingFileSink {
    /// Open (or create) the active log file at `path`.
    ///
    /// Missing parent directories are created. Fails with
    /// [`SinkError::PathInvalid`] if they cannot be, and with
    /// [`SinkError::PermissionDenied`] if the file cannot be opened for
    /// writing.
    pub fn new(path: impl AsRef<Path>, config: FileSinkConfig) -> Result<Self, SinkError> {
        if config.max_bytes == 0 {
            return Err(SinkError::IoFailure(io::Error::new(
                io::ErrorKind::InvalidInput,
                "max_bytes must be positive",
            )));
        }

        let path = log_file_path(path)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| SinkError::PathInvalid {
                    path: parent.to_path_buf(),
                    source,
                })?;
                debug!(dir = %parent.display(), "created log directory");
            }
        }

        let file = open_append(&path)?;
        let size = file.metadata()?.len();
        debug!(path = %path.display(), size, "opened rotating log file");

        Ok(Self {
            path,
            file: Some(file),
            size,
            config,
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size limit of the active file.
    pub fn max_bytes(&self) -> u64 {
        self.config.max_bytes
    }

    /// Number of backups kept.
    pub fn backup_count(&self) -> usize {
        self.config.backup_count
    }

    /// Bytes currently in the active file, as tracked by this sink.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path of backup number `index` (`1` is the newest).
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut raw: OsString = self.path.clone().into_os_string();
        raw.push(format!(".{}", index));
        PathBuf::from(raw)
    }

    /// Shift the active file into the backup chain and start a fresh one.
    ///
    /// Backups cascade `.1 -> .2 -> ...`; the oldest beyond `backup_count`
    /// is removed. With no backups configured the active file is discarded.
    pub fn rotate(&mut self) -> Result<(), SinkError> {
        self.file = None;

        if self.config.backup_count > 0 {
            for index in (1..self.config.backup_count).rev() {
                let src = self.backup_path(index);
                if src.exists() {
                    replace(&src, &self.backup_path(index + 1))?;
                }
            }
            if self.path.exists() {
                replace(&self.path, &self.backup_path(1))?;
            }
        } else if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        self.prune_backups()?;

        self.file = Some(open_append(&self.path)?);
        self.size = 0;
        debug!(path = %self.path.display(), backups = self.config.backup_count, "rotated log file");
        Ok(())
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        self.size >= self.config.max_bytes
            || (self.size > 0 && self.size + incoming > self.config.max_bytes)
    }

    /// Remove backups numbered beyond the configured count.
    fn prune_backups(&self) -> Result<(), SinkError> {
        let (Some(dir), Some(file_name)) = (self.path.parent(), self.path.file_name()) else {
            return Ok(());
        };
        let prefix = format!("{}.", file_name.to_string_lossy());

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();

            let stale = name
                .strip_prefix(&prefix)
                .and_then(|index| index.parse::<usize>().ok())
                .map(|index| index > self.config.backup_count)
                .unwrap_or(false);

            if stale {
                fs::remove_file(entry.path())?;
                debug!(path = %entry.path().display(), "removed stale log backup");
            }
        }

        Ok(())
    }

    fn handle(&mut self) -> Result<&mut File, SinkError> {
        if self.file.is_none() {
            let file = open_append(&self.path)?;
            self.size = file.metadata()?.len();
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| SinkError::IoFailure(io::Error::from(io::ErrorKind::NotConnected)))
    }
}

impl Sink for RotatingFileSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        let incoming = record.len() as u64;

        if self.should_rotate(incoming) {
            self.rotate()?;
        }

        self.handle()?.write_all(record.as_bytes())?;
        self.size += incoming;
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::RotatingFile
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

impl Drop for RotatingFileSink {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = file.sync_data() {
                warn!(path = %self.path.display(), error = %e, "failed to flush log file");
            }
        }
    }
}

impl fmt::Debug for RotatingFileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotatingFileSink")
            .field("path", &self.path)
            .field("size", &self.size)
            .field("max_bytes", &self.config.max_bytes)
            .field("backup_count", &self.config.backup_count)
            .finish()
    }
}

fn open_append(path: &Path) -> Result<File, SinkError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SinkError::from_open(path, e))
}

/// Rename `src` over `dst`, removing `dst` first where rename won't replace.
fn replace(src: &Path, dst: &Path) -> Result<(), SinkError> {
    if dst.exists() {
        fs::remove_file(dst)?;
    }
    fs::rename(src, dst)?;
    Ok(())
}
