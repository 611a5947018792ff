//! # Management Tools Types
//!
//! Core types, traits, and errors shared across the Management Tools crates.
//!
//! This crate provides the fundamental building blocks for the logging
//! facility used by the management scripts, including:
//!
//! - The ordered [`Severity`] enumeration and its numeric mapping
//! - A validated [`LogName`] for log file names
//! - The [`Sink`] capability trait implemented by console and file sinks
//! - Logger construction options ([`LoggerOptions`], [`FileSinkConfig`])
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use mgmt_types::{LogName, Severity};
//!
//! let name = LogName::new("deploy").unwrap();
//! assert_eq!(name.file_name(), "deploy.log");
//!
//! let level: Severity = "warning".parse().unwrap();
//! assert!(level > Severity::Info);
//! assert_eq!(level.value(), 30);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod identifiers;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{SinkError, ToolsError, Result};
pub use identifiers::LogName;
pub use enums::{Severity, SinkKind};
pub use traits::Sink;
pub use config::{FileSinkConfig, LoggerOptions};
