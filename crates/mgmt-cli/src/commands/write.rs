//! Write one entry to a named log.

use std::path::Path;

use anyhow::{Context, Result};
use mgmt_core::log::get_logger;
use mgmt_core::ToolsConfig;
use mgmt_types::{LoggerOptions, Severity};

/// A single log entry requested on the command line.
pub struct Entry<'a> {
    pub name: &'a str,
    pub level: Severity,
    pub message: String,
    pub path: Option<&'a Path>,
    pub echo: bool,
}

/// Persist `entry` to `<dir>/<name>.log`, echoing it unless quiet.
///
/// The logger accepts every level for the console so the requested level is
/// always echoed; the directory comes from the command line, then the
/// configuration, then the standard locations.
pub fn execute(config: &ToolsConfig, entry: &Entry<'_>) -> Result<()> {
    let options = LoggerOptions {
        name: Some(entry.name.to_string()),
        persist: true,
        level: Some(Severity::Debug),
        path: entry
            .path
            .map(Path::to_path_buf)
            .or_else(|| config.logging.path.clone()),
        file: config.logging.file,
    };

    let mut logger = get_logger(&options, entry.name)
        .with_context(|| format!("Failed to open log '{}'", entry.name))?;

    logger
        .log(entry.level, &entry.message, entry.echo, true)
        .context("Failed to write log entry")?;

    Ok(())
}
