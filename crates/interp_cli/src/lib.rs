//! interp_cli: command-line front end for interp_core.
//!
//! Configuration is layered as file, then `INTERP_*` environment, then CLI
//! flags (see [`config::build_config`]). Each command renders its result as
//! a table or as JSON.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
