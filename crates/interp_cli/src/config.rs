//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables, and
//! command-line arguments.

use interp_core::math::interpolators::InterpolationKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "INTERP_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid interpolation kind: {0}. Must be one of: linear, cubic")]
    InvalidKind(String),

    #[error("Invalid {name}: {value}. Must be a non-negative number")]
    InvalidThreshold { name: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Interpolation mode used when a command does not name one
    #[serde(deserialize_with = "deserialize_kind")]
    pub kind: InterpolationKind,
    /// Default reliable distance for the `reliability` command
    pub reliable_distance: Option<f64>,
    /// Precision tolerance; unset means 1e-6 for numbers and 0 for datetimes
    pub precision: Option<f64>,
    /// Log a warning whenever values are extrapolated
    pub extrapolation_warning: bool,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub output: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<InterpolationKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_kind(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

/// Parse an interpolation kind, accepting `spline` as an alias of `cubic`.
pub fn parse_kind(s: &str) -> Result<InterpolationKind, ConfigError> {
    InterpolationKind::from_str(s).map_err(|_| ConfigError::InvalidKind(s.to_string()))
}

fn parse_threshold(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidThreshold {
            name,
            value: raw.to_string(),
        })
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvError(format!(
            "{}{} must be a boolean, got '{}'",
            ENV_PREFIX, name, raw
        ))),
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            kind: InterpolationKind::Linear,
            reliable_distance: None,
            precision: None,
            extrapolation_warning: true,
            output: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the fields whose `INTERP_*` variable `lookup` can resolve.
    ///
    /// `lookup` receives the full variable name, e.g. `INTERP_LOG_LEVEL`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(kind) = var("KIND") {
            self.kind = parse_kind(&kind)?;
        }
        if let Some(distance) = var("RELIABLE_DISTANCE") {
            self.reliable_distance = Some(parse_threshold("reliable_distance", &distance)?);
        }
        if let Some(precision) = var("PRECISION") {
            self.precision = Some(parse_threshold("precision", &precision)?);
        }
        if let Some(warning) = var("EXTRAPOLATION_WARNING") {
            self.extrapolation_warning = parse_bool("EXTRAPOLATION_WARNING", &warning)?;
        }
        if let Some(output) = var("OUTPUT") {
            self.output = OutputFormat::from_str(&output)?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("reliable_distance", self.reliable_distance),
            ("precision", self.precision),
        ] {
            if let Some(v) = value {
                if !(v >= 0.0 && v.is_finite()) {
                    return Err(ConfigError::InvalidThreshold {
                        name,
                        value: v.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.output = OutputFormat::from_str(format)?;
        }
        if cli.quiet_extrapolation {
            self.extrapolation_warning = false;
        }

        Ok(())
    }
}

/// Global CLI arguments that feed the configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Suppress extrapolation warnings
    pub quiet_extrapolation: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;

    Ok(config)
}
