//! Configuration file loading with precedence handling.

use crate::model::{SheetCategory, StopPolicy, DEFAULT_CORNER_RADIUS};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "SHEETLINE_CONFIG";

/// Environment variable overriding the sheet category.
pub const CATEGORY_ENV: &str = "SHEETLINE_CATEGORY";

/// Environment variable overriding the stop policy.
pub const STOP_POLICY_ENV: &str = "SHEETLINE_STOP_POLICY";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but its value is not acceptable.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the file or environment.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/sheetline/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Category name (e.g., "info", "phone-alert").
    #[serde(default)]
    pub category: Option<String>,

    /// Whether Esc/q may dismiss the sheet.
    #[serde(default)]
    pub interactive_dismiss: Option<bool>,

    /// Whether the grabber bar is drawn.
    #[serde(default)]
    pub prefers_grabber_visible: Option<bool>,

    /// Corner radius; zero draws square corners.
    #[serde(default)]
    pub corner_radius: Option<u16>,

    /// "exact" or "include-medium".
    #[serde(default)]
    pub stop_policy: Option<StopPolicy>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Fraction of the screen the largest detent may cover, in (0, 1].
    #[serde(default)]
    pub max_detent_fraction: Option<f64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Sheet category.
    pub category: SheetCategory,
    /// Interactive dismissal.
    pub interactive_dismiss: bool,
    /// Grabber visibility.
    pub prefers_grabber_visible: bool,
    /// Corner radius.
    pub corner_radius: u16,
    /// Stop policy.
    pub stop_policy: StopPolicy,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Largest detent as a fraction of the screen.
    pub max_detent_fraction: f64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            category: SheetCategory::default(),
            interactive_dismiss: true,
            prefers_grabber_visible: true,
            corner_radius: DEFAULT_CORNER_RADIUS,
            stop_policy: StopPolicy::default(),
            log_file_path: default_log_path(),
            max_detent_fraction: 1.0,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/sheetline/sheetline.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("sheetline").join("sheetline.log")
    } else {
        PathBuf::from("sheetline.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
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
/// Returns `~/.config/sheetline/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sheetline").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SHEETLINE_CONFIG` environment variable
/// 3. Default path `~/.config/sheetline/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or if `SHEETLINE_CONFIG` is set to an empty string.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
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
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for an unknown category or a
/// detent fraction outside (0, 1].
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let category = match config.category {
        Some(name) => parse_category("category", &name)?,
        None => defaults.category,
    };

    let max_detent_fraction = match config.max_detent_fraction {
        Some(fraction) => validate_fraction(fraction)?,
        None => defaults.max_detent_fraction,
    };

    Ok(ResolvedConfig {
        category,
        interactive_dismiss: config
            .interactive_dismiss
            .unwrap_or(defaults.interactive_dismiss),
        prefers_grabber_visible: config
            .prefers_grabber_visible
            .unwrap_or(defaults.prefers_grabber_visible),
        corner_radius: config.corner_radius.unwrap_or(defaults.corner_radius),
        stop_policy: config.stop_policy.unwrap_or(defaults.stop_policy),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        max_detent_fraction,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SHEETLINE_CATEGORY`: Override category
/// - `SHEETLINE_STOP_POLICY`: Override stop policy
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if either variable holds an unknown name.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(category) = std::env::var(CATEGORY_ENV) {
        config.category = parse_category(CATEGORY_ENV, &category)?;
    }

    if let Ok(policy) = std::env::var(STOP_POLICY_ENV) {
        config.stop_policy = policy.parse().map_err(|e: crate::model::ParseError| {
            ConfigError::InvalidValue {
                field: STOP_POLICY_ENV,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `category_override` - Category from `--category`
/// * `stop_policy_override` - Policy from `--stop-policy`
/// * `dismiss_override` - `Some(false)` from `--no-dismiss`
/// * `grabber_override` - `Some(false)` from `--hide-grabber`
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    category_override: Option<SheetCategory>,
    stop_policy_override: Option<StopPolicy>,
    dismiss_override: Option<bool>,
    grabber_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(category) = category_override {
        config.category = category;
    }

    if let Some(policy) = stop_policy_override {
        config.stop_policy = policy;
    }

    if let Some(dismiss) = dismiss_override {
        config.interactive_dismiss = dismiss;
    }

    if let Some(grabber) = grabber_override {
        config.prefers_grabber_visible = grabber;
    }

    config
}

fn parse_category(field: &'static str, value: &str) -> Result<SheetCategory, ConfigError> {
    value.parse().map_err(|e: crate::model::ParseError| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

fn validate_fraction(fraction: f64) -> Result<f64, ConfigError> {
    if fraction > 0.0 && fraction <= 1.0 {
        Ok(fraction)
    } else {
        Err(ConfigError::InvalidValue {
            field: "max_detent_fraction",
            reason: format!("{fraction} is not in (0, 1]"),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
