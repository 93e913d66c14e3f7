//! CLI error types

use interp_core::types::{CalendarError, InterpolationError, ParseError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot read axis value: {0}")]
    Parse(#[from] ParseError),

    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
