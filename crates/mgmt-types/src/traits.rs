//! Core trait definitions for log destinations.

use std::path::Path;
use crate::SinkKind;
use crate::errors::SinkError;

/// A destination for formatted log lines.
///
/// Implementers receive lines that are already fully formatted (prompt or
/// timestamp applied by the logger) and must make them visible or durable
/// before returning. Sinks are owned by a single logger and are not shared;
/// `Send` lets a logger move between threads, but callers serialize access.
pub trait Sink: Send {
    /// Write one formatted line, followed by a line terminator.
    ///
    /// Errors are reported immediately and never retried.
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;

    /// The kind of destination this sink writes to.
    fn kind(&self) -> SinkKind;

    /// Path of the active file for file-backed sinks.
    fn path(&self) -> Option<&Path> {
        None
    }
}
