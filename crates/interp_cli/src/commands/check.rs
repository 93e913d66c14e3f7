//! Check command implementation
//!
//! Prints the effective configuration after file, environment and CLI
//! overrides have been applied.

use std::io::Write;

use tracing::info;

use super::output::write_table;
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

fn or_unset(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Run the check command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    match config.output {
        OutputFormat::Table => {
            let rows = vec![
                vec!["version".to_string(), crate::VERSION.to_string()],
                vec!["log_level".to_string(), config.log_level.to_string()],
                vec!["kind".to_string(), config.kind.to_string()],
                vec!["reliable_distance".to_string(), or_unset(config.reliable_distance)],
                vec!["precision".to_string(), or_unset(config.precision)],
                vec![
                    "extrapolation_warning".to_string(),
                    config.extrapolation_warning.to_string(),
                ],
                vec!["output".to_string(), config.output.to_string()],
            ];
            write_table(out, &["setting", "value"], &rows)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)?;
            writeln!(out)?;
        }
    }

    info!("Configuration OK");
    Ok(())
}
