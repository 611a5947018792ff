//! # Management Tools Core
//!
//! Logging, configuration, and common functionality for the Management Tools
//! administration scripts.
//!
//! This crate provides:
//!
//! - **Logging**: Leveled console output plus rotating log files, with
//!   permission-aware default directories
//! - **Configuration**: Layered configuration (defaults, file, set values,
//!   environment) resolved into an immutable struct
//! - **Diagnostics**: Opt-in `tracing` output for the tools' own housekeeping
//! - **Time Utilities**: Timestamp formatting for persisted lines
//! - **File Operations**: Path expansion and writability probing
//!
//! ## Example
//!
//! ```no_run
//! use mgmt_core::config::ToolsConfig;
//!
//! mgmt_core::diagnostics::init();
//!
//! let config = ToolsConfig::load()?;
//! let mut logger = mgmt_core::get_logger!(config.logging)?;
//!
//! logger.info("Checking disk usage")?;
//! logger.warn("Volume is 90% full")?;
//! # Ok::<(), mgmt_types::ToolsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod diagnostics;
pub mod log;
pub mod time;
pub mod util;

// Re-export commonly used items
pub use config::{Config, ToolsConfig};
pub use log::{get_logger, Logger};
pub use mgmt_types::{Result, Severity, SinkError, ToolsError};

/// Management Tools version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
