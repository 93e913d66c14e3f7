//! Reliability command implementation
//!
//! Reports, for every query point, the distance to the nearest sample and
//! whether that distance is within the reliable distance.

use std::io::Write;

use clap::Args;
use interp_core::math::reliability::{
    ReliabilityEstimator, ReliabilityReport, ReliabilityThreshold, DEFAULT_PRECISION,
};
use serde::Serialize;
use tracing::info;

use super::output::write_table;
use super::{normalize, split_axis};
use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Arguments of the `reliability` command
#[derive(Args, Debug, Clone, Default)]
pub struct ReliabilityArgs {
    /// Sample axis, comma-separated and sorted ascending
    #[arg(long, allow_hyphen_values = true)]
    pub x: String,

    /// Query axis, comma-separated and sorted ascending
    #[arg(long, allow_hyphen_values = true)]
    pub at: String,

    /// Reliable distance (seconds in datetime mode); defaults to the configured value
    #[arg(long)]
    pub distance: Option<f64>,

    /// Precision tolerance; defaults to 1e-6, or 0 in datetime mode
    #[arg(long)]
    pub precision: Option<f64>,

    /// Treat both axes as timestamps
    #[arg(short, long)]
    pub datetime: bool,
}

#[derive(Debug, Serialize)]
struct ReliabilityOutput<'a> {
    reliable_distance: f64,
    precision: f64,
    points: Vec<Row<'a>>,
}

#[derive(Debug, Serialize)]
struct Row<'a> {
    x: &'a str,
    distance: f64,
    reliable: bool,
}

/// Threshold from the command arguments, falling back to the configuration.
fn threshold(args: &ReliabilityArgs, config: &CliConfig) -> Result<ReliabilityThreshold> {
    let distance = args
        .distance
        .or(config.reliable_distance)
        .ok_or_else(|| {
            CliError::InvalidArgument(
                "no reliable distance given; pass --distance or set reliable_distance".to_string(),
            )
        })?;
    let default_precision = if args.datetime { 0.0 } else { DEFAULT_PRECISION };
    let precision = args.precision.or(config.precision).unwrap_or(default_precision);

    Ok(ReliabilityThreshold::with_precision(distance, precision)?)
}

/// Run the reliability command
pub fn run<W: Write>(args: &ReliabilityArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let threshold = threshold(args, config)?;
    let labels = split_axis(&args.at);
    let samples = normalize(&split_axis(&args.x), args.datetime)?;
    let queries = normalize(&labels, args.datetime)?;

    let report: ReliabilityReport = ReliabilityEstimator::new(threshold).report(&samples, &queries)?;

    info!(
        queries = report.len(),
        reliable = report.reliable_count(),
        reliable_distance = threshold.reliable_distance(),
        precision = threshold.precision(),
        "Reliability classified"
    );

    match config.output {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = labels
                .iter()
                .zip(report.distances.iter().zip(&report.reliable))
                .map(|(x, (d, r))| vec![x.clone(), d.to_string(), r.to_string()])
                .collect();
            write_table(out, &["x", "distance", "reliable"], &rows)?;
        }
        OutputFormat::Json => {
            let output = ReliabilityOutput {
                reliable_distance: threshold.reliable_distance(),
                precision: threshold.precision(),
                points: labels
                    .iter()
                    .zip(report.distances.iter().zip(&report.reliable))
                    .map(|(x, (&distance, &reliable))| Row {
                        x: x.as_str(),
                        distance,
                        reliable,
                    })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
