//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::Severity;

/// Default size limit of the active log file (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10_485_760;

/// Default number of numbered backups kept beside the active file.
pub const DEFAULT_BACKUP_COUNT: usize = 5;

/// Rotation limits for a file sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSinkConfig {
    /// Size at which the active file is rotated
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Number of backups to keep (`0` truncates on rotation)
    #[serde(default = "default_backup_count")]
    pub backup_count: usize,
}

fn default_max_bytes() -> u64 {
    DEFAULT_MAX_BYTES
}

fn default_backup_count() -> usize {
    DEFAULT_BACKUP_COUNT
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

/// Everything needed to build a logger, fixed once per invocation.
///
/// # Example
///
/// ```
/// use mgmt_types::{LoggerOptions, Severity};
///
/// let options = LoggerOptions::persisted()
///     .with_name("deploy")
///     .with_level(Severity::Warning)
///     .with_path("/tmp/logs");
/// assert!(options.persist);
/// assert_eq!(options.level, Some(Severity::Warning));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Logger name; the caller's default is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether to attach a rotating file sink
    #[serde(default)]
    pub persist: bool,
    /// Minimum console level; INFO when persisting, DEBUG otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,
    /// Log directory overriding the privileged/user defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Rotation limits for the file sink
    #[serde(flatten)]
    pub file: FileSinkConfig,
}

impl LoggerOptions {
    /// Options for a console-only logger.
    pub fn console() -> Self {
        Self {
            name: None,
            persist: false,
            level: None,
            path: None,
            file: FileSinkConfig::default(),
        }
    }

    /// Options for a console + rotating file logger.
    pub fn persisted() -> Self {
        Self {
            persist: true,
            ..Self::console()
        }
    }

    /// Set the logger name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the minimum console level.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    /// Set an explicit log directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the rotation limits.
    pub fn with_file_config(mut self, file: FileSinkConfig) -> Self {
        self.file = file;
        self
    }

    /// The minimum level after applying the persist-dependent default.
    pub fn effective_level(&self) -> Severity {
        self.level.unwrap_or(if self.persist {
            Severity::Info
        } else {
            Severity::Debug
        })
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::console()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level_defaults() {
        assert_eq!(LoggerOptions::console().effective_level(), Severity::Debug);
        assert_eq!(LoggerOptions::persisted().effective_level(), Severity::Info);
        assert_eq!(
            LoggerOptions::persisted().with_level(Severity::Error).effective_level(),
            Severity::Error
        );
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: LoggerOptions = serde_json::from_value(serde_json::json!({
            "persist": true,
            "level": "warning",
            "backup_count": 2
        }))
        .unwrap();

        assert!(options.persist);
        assert_eq!(options.level, Some(Severity::Warning));
        assert_eq!(options.file.backup_count, 2);
        assert_eq!(options.file.max_bytes, DEFAULT_MAX_BYTES);
        assert!(options.name.is_none());
    }
}
