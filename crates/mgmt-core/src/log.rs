//! Leveled logging to the console and to rotating log files.
//!
//! A [`Logger`] echoes messages to the console (filtered by its minimum
//! level, prefixed by a per-level prompt) and persists them to any attached
//! sinks as `YYYY-MM-DD HH:MM:SS,mmm LEVELNAME: message` lines.
//!
//! ```no_run
//! use mgmt_core::log::get_logger;
//! use mgmt_types::LoggerOptions;
//!
//! let options = LoggerOptions::persisted().with_name("deploy");
//! let mut logger = get_logger(&options, "deploy")?;
//!
//! logger.info("starting deployment")?;
//! logger.error("disk full")?; // console: "ERROR: disk full"
//! # Ok::<(), mgmt_types::ToolsError>(())
//! ```

mod console;
mod factory;
mod format;
mod logger;
mod rotating;

pub use console::ConsoleSink;
pub use factory::{
    file_logger, get_logger, get_logger_in, stream_logger, LogDirs, ELEVATED_PATH, LOCAL_PATH,
};
pub use format::{default_prompt, format_record, PromptTable};
pub use logger::Logger;
pub use rotating::{log_file_path, RotatingFileSink};
