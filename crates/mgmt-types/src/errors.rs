//! Error types for Management Tools operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by log sinks and surfaced unchanged by the logger.
///
/// Construction-time failures (`PathInvalid`, `PermissionDenied`) mean no
/// sink or logger was produced. Per-call failures are reported once, to the
/// caller of the logging method.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The destination directory is missing and could not be created.
    #[error("Invalid path specified: could not create '{}': {source}", .path.display())]
    PathInvalid {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying creation failure
        #[source]
        source: io::Error,
    },

    /// The resolved destination is not writable by this process.
    #[error("Permission denied: cannot write to '{}'", .path.display())]
    PermissionDenied {
        /// Destination that was refused
        path: PathBuf,
    },

    /// The console destination has gone away (e.g. a closed pipe).
    #[error("Console stream is closed")]
    StreamClosed,

    /// Any other read, write, or rotation failure.
    #[error("Log I/O failure: {0}")]
    IoFailure(#[from] io::Error),
}

impl SinkError {
    /// Classify an I/O error raised while opening `path`.
    ///
    /// A read-only filesystem refuses the write just like a mode check does,
    /// so both become [`SinkError::PermissionDenied`].
    pub fn from_open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied || is_read_only_fs(&err) {
            SinkError::PermissionDenied { path: path.into() }
        } else {
            SinkError::IoFailure(err)
        }
    }

    /// Classify an I/O error raised while writing to the console.
    pub fn from_console(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => SinkError::StreamClosed,
            _ => SinkError::IoFailure(err),
        }
    }
}

/// `EROFS`, identical on Linux and macOS.
#[cfg(unix)]
const EROFS: i32 = 30;

#[cfg(unix)]
fn is_read_only_fs(err: &io::Error) -> bool {
    err.raw_os_error() == Some(EROFS)
}

#[cfg(not(unix))]
fn is_read_only_fs(_err: &io::Error) -> bool {
    false
}

/// The main error type for Management Tools operations.
#[derive(Error, Debug)]
pub enum ToolsError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Log sink error
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON conversion error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for Management Tools operations.
pub type Result<T> = std::result::Result<T, ToolsError>;

/// Return early with a message-carrying [`ToolsError`] variant.
///
/// ```
/// use mgmt_types::{bail, Result};
///
/// fn check(name: &str) -> Result<()> {
///     if name.is_empty() {
///         bail!(Validation, "Empty log name");
///     }
///     Ok(())
/// }
///
/// assert!(check("").is_err());
/// assert!(check("deploy").is_ok());
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::ToolsError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::ToolsError::$variant(format!($fmt, $($arg)*)))
    };
}
