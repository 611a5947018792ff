//! Type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{ToolsError, Result};

/// Suffix every persisted log file carries.
pub const LOG_SUFFIX: &str = ".log";

/// A validated log name.
///
/// Log names become file names inside the chosen log directory, so they must:
/// - Be non-empty
/// - Contain no path separators or NUL bytes
/// - Not be `.` or `..`
///
/// # Example
///
/// ```
/// use mgmt_types::LogName;
///
/// let name = LogName::new("deploy").unwrap();
/// assert_eq!(name.file_name(), "deploy.log");
///
/// // A trailing suffix is never doubled
/// let name = LogName::new("deploy.log").unwrap();
/// assert_eq!(name.file_name(), "deploy.log");
///
/// // Invalid names are rejected
/// assert!(LogName::new("").is_err());
/// assert!(LogName::new("../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogName(String);

impl LogName {
    /// Create a new validated log name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name doesn't meet validation requirements.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        if !Self::is_valid(name) {
            crate::bail!(
                Validation,
                "Invalid log name '{}': must be non-empty and must not contain path separators",
                name
            );
        }
        Ok(Self(name.to_string()))
    }

    /// Check if a name is valid without allocating.
    pub fn is_valid(name: &str) -> bool {
        if name.is_empty() || name == "." || name == ".." {
            return false;
        }

        !name.chars().any(|c| c == '/' || c == '\\' || c == '\0')
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the active log: the name with `.log` appended unless it
    /// already ends that way.
    pub fn file_name(&self) -> String {
        if self.0.ends_with(LOG_SUFFIX) {
            self.0.clone()
        } else {
            format!("{}{}", self.0, LOG_SUFFIX)
        }
    }
}

impl fmt::Display for LogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogName {
    type Err = ToolsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for LogName {
    type Error = ToolsError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<LogName> for String {
    fn from(name: LogName) -> Self {
        name.0
    }
}
