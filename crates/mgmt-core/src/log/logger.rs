//! Leveled logger dispatching to a console sink and persistent sinks.

use std::fmt;
use std::path::Path;

use mgmt_types::{Severity, Sink, SinkError};

use super::format::{format_record, PromptTable};
use crate::time::now_timestamp;

/// A named logger with an optional console sink and any number of
/// persistent sinks.
///
/// Every call is routed two ways, each independently:
///
/// 1. **Console**, when `print_out` is set and the level is at or above the
///    logger's minimum: `<prompt><message>`.
/// 2. **Persistent sinks**, when `persist` is set:
///    `<timestamp> <LEVELNAME>: <message>`. This path is *not* filtered by
///    the minimum level; every persisted call reaches the sinks.
///
/// Loggers hold no internal lock. Share one across threads only behind the
/// caller's own synchronization.
pub struct Logger {
    name: String,
    level: Severity,
    prompts: PromptTable,
    console: Option<Box<dyn Sink>>,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// A logger with no sinks attached.
    pub fn new(name: impl Into<String>, level: Severity) -> Self {
        Self {
            name: name.into(),
            level,
            prompts: PromptTable::default(),
            console: None,
            sinks: Vec::new(),
        }
    }

    /// Attach the console sink, replacing any previous one.
    pub fn with_console(mut self, sink: impl Sink + 'static) -> Self {
        self.console = Some(Box::new(sink));
        self
    }

    /// Attach a persistent sink.
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.attach(Box::new(sink));
        self
    }

    /// Attach a persistent sink to an existing logger.
    pub fn attach(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum level for console output.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Change the minimum level for console output.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Console prompt currently used for `level`.
    pub fn prompt(&self, level: Severity) -> &str {
        self.prompts.get(level)
    }

    /// Replace this logger's console prompt for `level`.
    pub fn set_prompt(&mut self, level: Severity, prompt: impl Into<String>) {
        self.prompts.set(level, prompt);
    }

    /// Whether a console sink is attached.
    pub fn has_console(&self) -> bool {
        self.console.is_some()
    }

    /// Paths of attached file-backed sinks.
    pub fn log_paths(&self) -> Vec<&Path> {
        self.sinks.iter().filter_map(|sink| sink.path()).collect()
    }

    /// Log `message` at `level`, choosing the routes explicitly.
    pub fn log(
        &mut self,
        level: Severity,
        message: &str,
        print_out: bool,
        persist: bool,
    ) -> Result<(), SinkError> {
        if print_out && level >= self.level {
            if let Some(console) = self.console.as_mut() {
                console.emit(&self.prompts.format(level, message))?;
            }
        }

        if persist && !self.sinks.is_empty() {
            let record = format_record(&now_timestamp(), level, message);
            for sink in self.sinks.iter_mut() {
                sink.emit(&record)?;
            }
        }

        Ok(())
    }

    /// Debugging output.
    pub fn debug(&mut self, message: &str) -> Result<(), SinkError> {
        self.debug_with(message, true, true)
    }

    /// Debugging output with explicit routes.
    pub fn debug_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.log(Severity::Debug, message, print_out, persist)
    }

    /// General information.
    pub fn info(&mut self, message: &str) -> Result<(), SinkError> {
        self.info_with(message, true, true)
    }

    /// General information with explicit routes.
    pub fn info_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.log(Severity::Info, message, print_out, persist)
    }

    /// A warning: notable, but not enough to halt execution.
    pub fn warning(&mut self, message: &str) -> Result<(), SinkError> {
        self.warning_with(message, true, true)
    }

    /// A warning with explicit routes.
    pub fn warning_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.log(Severity::Warning, message, print_out, persist)
    }

    /// Alias of [`Logger::warning`].
    pub fn warn(&mut self, message: &str) -> Result<(), SinkError> {
        self.warning(message)
    }

    /// Alias of [`Logger::warning_with`].
    pub fn warn_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.warning_with(message, print_out, persist)
    }

    /// An error.
    pub fn error(&mut self, message: &str) -> Result<(), SinkError> {
        self.error_with(message, true, true)
    }

    /// An error with explicit routes.
    pub fn error_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.log(Severity::Error, message, print_out, persist)
    }

    /// A critical failure; usually execution should halt.
    pub fn critical(&mut self, message: &str) -> Result<(), SinkError> {
        self.critical_with(message, true, true)
    }

    /// A critical failure with explicit routes.
    pub fn critical_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.log(Severity::Critical, message, print_out, persist)
    }

    /// Alias of [`Logger::critical`].
    pub fn fatal(&mut self, message: &str) -> Result<(), SinkError> {
        self.critical(message)
    }

    /// Alias of [`Logger::critical_with`].
    pub fn fatal_with(&mut self, message: &str, print_out: bool, persist: bool) -> Result<(), SinkError> {
        self.critical_with(message, print_out, persist)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("console", &self.console.is_some())
            .field("sinks", &self.sinks.iter().map(|s| s.kind()).collect::<Vec<_>>())
            .finish()
    }
}
