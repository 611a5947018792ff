//! CLI structure and argument definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mgmt_core::ToolsConfig;
use mgmt_types::Severity;

use crate::commands::write::{self, Entry};

#[derive(Parser)]
#[command(name = "management-logger")]
#[command(version = env!("CARGO_PKG_VERSION"), disable_version_flag = true)]
#[command(
    about = "Used to output information to a log. The first word is the name of the log, and the rest is the message.",
    long_about = None
)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// A different directory to put the log file in
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Logging level: a name (debug, info, warning, error, critical) or a
    /// number (10-50); lower numbers record less severe events
    #[arg(short, long, default_value = "20")]
    pub level: Severity,

    /// Write to the log without echoing to the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file to read defaults from
    #[arg(short, long, env = "MANAGEMENT_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// The name of the log file
    pub name: String,

    /// The stuff to put into the log entry
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => ToolsConfig::load_from(path),
            None => ToolsConfig::load(),
        }
        .context("Failed to load configuration")?;

        let entry = Entry {
            name: &self.name,
            level: self.level,
            message: self.message.join(" "),
            path: self.path.as_deref(),
            echo: !self.quiet,
        };

        write::execute(&config, &entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_levels() {
        let cli = Cli::parse_from(["management-logger", "-l", "warning", "deploy", "low", "disk"]);
        assert_eq!(cli.level, Severity::Warning);
        assert_eq!(cli.name, "deploy");
        assert_eq!(cli.message, vec!["low", "disk"]);

        let cli = Cli::parse_from(["management-logger", "-l", "45", "deploy", "x"]);
        assert_eq!(cli.level, Severity::Error);

        let cli = Cli::parse_from(["management-logger", "deploy", "x"]);
        assert_eq!(cli.level, Severity::Info);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_lowercase_version_flag() {
        for flag in ["-v", "--version"] {
            let err = Cli::try_parse_from(["management-logger", flag])
                .err()
                .unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_message_required() {
        assert!(Cli::try_parse_from(["management-logger", "deploy"]).is_err());
    }
}
