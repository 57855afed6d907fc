//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A `[keybindings]` entry could not be applied.
    #[error("Invalid key binding '{key}': {reason}")]
    InvalidKeyBinding {
        /// Key string as written in the config.
        key: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/posthorn/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Collection directory to open when none is given on the command line.
    #[serde(default)]
    pub collection: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// How long notifications stay on screen, in milliseconds.
    #[serde(default)]
    pub notification_timeout_ms: Option<u64>,

    /// Key string → action name overrides.
    ///
    /// ```toml
    /// [keybindings]
    /// "]" = "next_tab"
    /// "[" = "previous_tab"
    /// ```
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Collection root directory.
    pub collection: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Notification lifetime.
    pub notification_timeout: Duration,
    /// Key binding overrides, applied on top of the defaults.
    pub keybindings: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            collection: PathBuf::from("."),
            log_file_path: default_log_path(),
            notification_timeout: Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS),
            keybindings: HashMap::new(),
        }
    }
}

/// Default notification lifetime.
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u64 = 3_000;

/// Resolve default log file path.
///
/// Returns `~/.local/state/posthorn/posthorn.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("posthorn").join("posthorn.log")
    } else {
        PathBuf::from("posthorn.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/posthorn/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("posthorn").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTHORN_CONFIG` environment variable
/// 3. Default path `~/.config/posthorn/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("POSTHORN_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        collection: config.collection.unwrap_or(defaults.collection),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        notification_timeout: config
            .notification_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.notification_timeout),
        keybindings: config.keybindings.unwrap_or(defaults.keybindings),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `POSTHORN_COLLECTION`: Override collection directory
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(collection) = std::env::var("POSTHORN_COLLECTION") {
        config.collection = PathBuf::from(collection);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for arguments that were explicitly given.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    collection_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(collection) = collection_override {
        config.collection = collection;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
