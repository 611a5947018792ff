//! Logger construction: directory selection and File/Stream choice.

use std::path::{Path, PathBuf};

use mgmt_types::{FileSinkConfig, LogName, LoggerOptions, Result, Severity};
use tracing::debug;

use super::console::ConsoleSink;
use super::logger::Logger;
use super::rotating::RotatingFileSink;
use crate::util::fs::{expand_path, is_writable_dir};

/// System-wide log directory, used when writable.
pub const ELEVATED_PATH: &str = "/var/log/management";

/// Per-user log directory, used when the system directory is not writable.
pub const LOCAL_PATH: &str = "~/Library/Logs/Management";

/// Candidate directories for persisted logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirs {
    /// Privileged directory, preferred when writable
    pub elevated: PathBuf,
    /// Unprivileged fallback
    pub local: PathBuf,
}

impl LogDirs {
    /// Pick the base directory: explicit > elevated if writable > local.
    ///
    /// The elevated directory counts as writable if it exists and is
    /// writable, or if it does not exist yet and its parent is writable.
    pub fn resolve(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return expand_path(dir);
        }

        let probe = if self.elevated.exists() {
            Some(self.elevated.as_path())
        } else {
            self.elevated.parent()
        };

        if probe.map(is_writable_dir).unwrap_or(false) {
            self.elevated.clone()
        } else {
            debug!(
                elevated = %self.elevated.display(),
                local = %self.local.display(),
                "system log directory not writable; using user directory"
            );
            expand_path(&self.local)
        }
    }

    /// Full path of the active log file for `name`.
    pub fn log_file(&self, explicit: Option<&Path>, name: &LogName) -> PathBuf {
        self.resolve(explicit).join(name.file_name())
    }
}

impl Default for LogDirs {
    fn default() -> Self {
        Self {
            elevated: PathBuf::from(ELEVATED_PATH),
            local: PathBuf::from(LOCAL_PATH),
        }
    }
}

/// Build a logger from `options`, using the standard log directories.
///
/// `default_name` is used when `options.name` is unset; the
/// [`get_logger!`](crate::get_logger) macro passes the calling module's path.
///
/// Persisting loggers get a console sink plus a rotating file sink and
/// default to INFO; console-only loggers default to DEBUG. Failure to set up
/// the file sink is returned as an error, never downgraded.
pub fn get_logger(options: &LoggerOptions, default_name: &str) -> Result<Logger> {
    get_logger_in(&LogDirs::default(), options, default_name)
}

/// [`get_logger`] with explicit candidate directories.
pub fn get_logger_in(dirs: &LogDirs, options: &LoggerOptions, default_name: &str) -> Result<Logger> {
    let name = options.name.as_deref().unwrap_or(default_name);
    let level = options.effective_level();

    let logger = Logger::new(name, level).with_console(ConsoleSink::stdout());
    if !options.persist {
        return Ok(logger);
    }

    let log_name = LogName::new(name)?;
    let path = dirs.log_file(options.path.as_deref(), &log_name);
    let sink = RotatingFileSink::new(&path, options.file)?;
    debug!(logger = name, path = %sink.path().display(), "file logger ready");

    Ok(logger.with_sink(sink))
}

/// A persisting logger named `name`, writing under `path` or the default
/// directories. Equivalent to [`get_logger`] with `persist` set.
pub fn file_logger(name: &str, level: Option<Severity>, path: Option<&Path>) -> Result<Logger> {
    let options = LoggerOptions {
        name: Some(name.to_string()),
        persist: true,
        level,
        path: path.map(Path::to_path_buf),
        file: FileSinkConfig::default(),
    };
    get_logger(&options, name)
}

/// A console-only logger named `name`, DEBUG by default.
pub fn stream_logger(name: &str, level: Option<Severity>) -> Logger {
    Logger::new(name, level.unwrap_or(Severity::Debug)).with_console(ConsoleSink::stdout())
}

/// Build a logger named after the calling module unless `options` names one.
///
/// ```no_run
/// use mgmt_types::LoggerOptions;
///
/// let mut logger = mgmt_core::get_logger!(LoggerOptions::console())?;
/// logger.info("starting")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[macro_export]
macro_rules! get_logger {
    ($options:expr) => {
        $crate::log::get_logger(&$options, module_path!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgmt_types::{SinkError, ToolsError};
    use tempfile::TempDir;

    fn dirs_in(root: &Path) -> LogDirs {
        LogDirs {
            elevated: root.join("system/management"),
            local: root.join("user/Logs/Management"),
        }
    }

    #[test]
    fn test_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        std::fs::create_dir_all(temp_dir.path().join("system")).unwrap();

        let explicit = temp_dir.path().join("custom");
        assert_eq!(dirs.resolve(Some(&explicit)), explicit);
    }

    #[test]
    fn test_elevated_when_parent_writable() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        std::fs::create_dir_all(temp_dir.path().join("system")).unwrap();

        assert_eq!(dirs.resolve(None), dirs.elevated);
    }

    #[test]
    fn test_local_when_elevated_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());

        // Neither the elevated directory nor its parent exists
        assert_eq!(dirs.resolve(None), dirs.local);
    }

    #[cfg(unix)]
    #[test]
    fn test_local_when_elevated_read_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        std::fs::create_dir_all(&dirs.elevated).unwrap();
        std::fs::set_permissions(&dirs.elevated, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Privileged users bypass mode bits; nothing to check then.
        if is_writable_dir(&dirs.elevated) {
            return;
        }

        assert_eq!(dirs.resolve(None), dirs.local);
        std::fs::set_permissions(&dirs.elevated, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_local_when_elevated_refuses_root() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = LogDirs {
            elevated: PathBuf::from("/sys/kernel"),
            local: temp_dir.path().join("user/Logs/Management"),
        };
        if !dirs.elevated.is_dir() {
            return;
        }

        assert_eq!(dirs.resolve(None), dirs.local);
    }

    #[test]
    fn test_log_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        let name = LogName::new("deploy").unwrap();

        assert_eq!(
            dirs.log_file(Some(temp_dir.path()), &name),
            temp_dir.path().join("deploy.log")
        );
    }

    #[test]
    fn test_persisting_logger() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        let options = LoggerOptions::persisted().with_path(temp_dir.path().join("logs"));

        let mut logger = get_logger_in(&dirs, &options, "mgmt_core::factory").unwrap();
        assert_eq!(logger.name(), "mgmt_core::factory");
        assert_eq!(logger.level(), Severity::Info);
        assert!(logger.has_console());

        let expected = temp_dir.path().join("logs/mgmt_core::factory.log");
        assert_eq!(logger.log_paths(), vec![expected.as_path()]);

        logger.info_with("persisted", false, true).unwrap();
        let content = std::fs::read_to_string(&expected).unwrap();
        assert!(content.ends_with(" INFO: persisted\n"));
    }

    #[test]
    fn test_persisting_logger_falls_back_to_local() {
        let temp_dir = TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        let options = LoggerOptions::persisted().with_name("agent");

        let logger = get_logger_in(&dirs, &options, "unused").unwrap();
        let expected = dirs.local.join("agent.log");
        assert_eq!(logger.log_paths(), vec![expected.as_path()]);
        assert!(expected.exists());
    }

    #[test]
    fn test_console_logger_defaults_to_debug() {
        let options = LoggerOptions::console();
        let logger = get_logger(&options, "script").unwrap();

        assert_eq!(logger.name(), "script");
        assert_eq!(logger.level(), Severity::Debug);
        assert!(logger.log_paths().is_empty());
    }

    #[test]
    fn test_explicit_level_respected() {
        let temp_dir = TempDir::new().unwrap();
        let options = LoggerOptions::persisted()
            .with_name("quiet")
            .with_level(Severity::Error)
            .with_path(temp_dir.path());

        let logger = get_logger_in(&dirs_in(temp_dir.path()), &options, "unused").unwrap();
        assert_eq!(logger.level(), Severity::Error);
    }

    #[test]
    fn test_construction_failure_is_surfaced() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let options = LoggerOptions::persisted()
            .with_name("tool")
            .with_path(blocker.join("logs"));

        let result = get_logger_in(&dirs_in(temp_dir.path()), &options, "unused");
        assert!(matches!(
            result,
            Err(ToolsError::Sink(SinkError::PathInvalid { .. }))
        ));
    }

    #[test]
    fn test_invalid_name_rejected_for_files() {
        let temp_dir = TempDir::new().unwrap();
        let options = LoggerOptions::persisted()
            .with_name("../escape")
            .with_path(temp_dir.path());

        let result = get_logger_in(&dirs_in(temp_dir.path()), &options, "unused");
        assert!(matches!(result, Err(ToolsError::Validation(_))));
    }

    #[test]
    fn test_compat_constructors() {
        let temp_dir = TempDir::new().unwrap();

        let logger = file_logger("compat", None, Some(temp_dir.path())).unwrap();
        assert_eq!(logger.level(), Severity::Info);
        assert_eq!(logger.log_paths(), vec![temp_dir.path().join("compat.log").as_path()]);

        let logger = stream_logger("compat", None);
        assert_eq!(logger.level(), Severity::Debug);
        assert!(logger.log_paths().is_empty());
    }

    #[test]
    fn test_macro_uses_module_path() {
        let logger = crate::get_logger!(LoggerOptions::console()).unwrap();
        assert_eq!(logger.name(), module_path!());
    }
}
