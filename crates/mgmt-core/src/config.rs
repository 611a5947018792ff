//! Configuration management for Management Tools.
//!
//! Scripts used to share options through a mutable global dictionary. Here
//! configuration is resolved once into an immutable [`ToolsConfig`] which is
//! passed by reference to whatever needs it.
//!
//! ## Configuration Layers
//!
//! Configuration values are resolved in this priority order:
//! 1. Environment variables (`MANAGEMENT_TOOLS_LOGGING__LEVEL=debug`)
//! 2. Values loaded from file
//!
//! Anything neither layer sets falls back to the [`LoggerOptions`] defaults.
//!
//! ## Example
//!
//! ```no_run
//! use mgmt_core::config::ToolsConfig;
//!
//! let config = ToolsConfig::load()?;
//! let mut logger = mgmt_core::get_logger!(config.logging)?;
//! logger.info("configured")?;
//! # Ok::<(), mgmt_types::ToolsError>(())
//! ```

use mgmt_types::{LoggerOptions, Result, ToolsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::util::data::{deep_merge, get_path, set_path};

/// Prefix of environment variables mapped into the configuration.
///
/// Double underscores separate nesting levels.
pub const ENV_PREFIX: &str = "MANAGEMENT_TOOLS_";

/// Keys whose values are text even when they look like numbers or booleans.
const TEXT_KEYS: [&str; 2] = ["logging.name", "logging.path"];

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Values loaded from file
    Loaded = 0,
    /// Values from environment variables
    Environment = 1,
}

impl ConfigLayer {
    const LOWEST_FIRST: [ConfigLayer; 2] = [ConfigLayer::Loaded, ConfigLayer::Environment];
}

/// Layered configuration values.
///
/// This is the untyped layer store; [`ToolsConfig`] is the typed view.
#[derive(Clone, Debug, Default)]
pub struct Config {
    layers: HashMap<ConfigLayer, Value>,
    file_path: Option<PathBuf>,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from a YAML file.
    ///
    /// If the file doesn't exist, an empty configuration is created.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self {
            file_path: Some(path.to_path_buf()),
            ..Self::default()
        };

        if path.exists() {
            let content = fs::read_to_string(path)?;

            if !content.trim().is_empty() {
                let value: Value = serde_yaml::from_str(&content)
                    .map_err(|e| ToolsError::Config(format!("Failed to parse config: {}", e)))?;

                if !value.is_null() {
                    config.layers.insert(ConfigLayer::Loaded, value);
                }
            }
            debug!(path = %path.display(), "loaded configuration file");
        }

        Ok(config)
    }

    /// Path the configuration was loaded from, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Fill the environment layer from `MANAGEMENT_TOOLS_*` variables.
    pub fn with_environment(self) -> Self {
        self.with_env_vars(std::env::vars())
    }

    /// Fill the environment layer from the given variables.
    ///
    /// `MANAGEMENT_TOOLS_LOGGING__MAX_BYTES=1024` becomes
    /// `logging.max_bytes = 1024`. Values are read as YAML scalars, so
    /// numbers and booleans keep their types.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layer = Value::Object(Default::default());

        for (key, value) in vars {
            let Some(stripped) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if !stripped.contains("__") {
                continue;
            }

            let path = stripped.to_lowercase().replace("__", ".");
            let raw = value.as_ref();
            let parsed = if TEXT_KEYS.contains(&path.as_str()) {
                Value::String(raw.to_string())
            } else {
                serde_yaml::from_str::<Value>(raw)
                    .ok()
                    .filter(|v| !v.is_object() && !v.is_array() && !v.is_null())
                    .unwrap_or_else(|| Value::String(raw.to_string()))
            };

            set_path(&mut layer, &path, parsed);
        }

        self.layers.insert(ConfigLayer::Environment, layer);
        self
    }

    /// All layers merged, highest priority winning.
    pub fn merged(&self) -> Value {
        ConfigLayer::LOWEST_FIRST
            .iter()
            .filter_map(|layer| self.layers.get(layer))
            .fold(Value::Object(Default::default()), |merged, data| {
                deep_merge(merged, data.clone())
            })
    }
}

/// Typed Management Tools configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Logger construction options
    #[serde(default)]
    pub logging: LoggerOptions,
}

impl ToolsConfig {
    /// Load from the default location, with environment overrides.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(path),
            None => Self::from_config(&Config::new().with_environment()),
        }
    }

    /// Load from a specific file, with environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&Config::load(path)?.with_environment())
    }

    /// Build the typed view of a layered configuration.
    ///
    /// Text settings written as bare numbers or booleans in YAML
    /// (`name: 2024`) are read as their text.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut merged = config.merged();

        for key in TEXT_KEYS {
            let text = get_path(&merged, key)
                .filter(|value| value.is_number() || value.is_boolean())
                .map(|value| value.to_string());
            if let Some(text) = text {
                set_path(&mut merged, key, Value::String(text));
            }
        }

        serde_json::from_value(merged)
            .map_err(|e| ToolsError::Config(format!("Failed to parse tools config: {}", e)))
    }

    /// Default configuration file: `~/Library/Management/management_tools.yml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| {
            home.join("Library")
                .join("Management")
                .join("management_tools.yml")
        })
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            logging: LoggerOptions::console(),
        }
    }
}
