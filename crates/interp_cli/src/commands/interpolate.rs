//! Interpolate command implementation
//!
//! Evaluates a sampled function at query points, strictly inside the sample
//! range or with linear extrapolation beyond it.

use std::io::Write;

use clap::Args;
use interp_core::calendar::{extrapolate_by_datetime_with, interpolate_by_datetime};
use interp_core::math::interpolators::{evaluate, ExtrapolationExtender, InterpolationKind};
use interp_core::types::AxisValue;
use serde::Serialize;
use tracing::info;

use super::output::write_table;
use super::{normalize, split_axis, to_axis};
use crate::config::{parse_kind, CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Arguments of the `interpolate` command
#[derive(Args, Debug, Clone, Default)]
pub struct InterpolateArgs {
    /// Sample axis, comma-separated
    #[arg(long, allow_hyphen_values = true)]
    pub x: String,

    /// Sample values, comma-separated
    #[arg(long, allow_hyphen_values = true)]
    pub y: String,

    /// Query axis, comma-separated
    #[arg(long, allow_hyphen_values = true)]
    pub at: String,

    /// Interpolation kind (linear, cubic); defaults to the configured kind
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Extrapolate linearly beyond the sample range
    #[arg(short, long)]
    pub extrapolate: bool,

    /// Treat both axes as timestamps
    #[arg(short, long)]
    pub datetime: bool,
}

#[derive(Debug, Serialize)]
struct Point<'a> {
    x: &'a str,
    y: f64,
}

#[derive(Debug, Serialize)]
struct InterpolationOutput<'a> {
    kind: InterpolationKind,
    extrapolate: bool,
    points: Vec<Point<'a>>,
}

/// Run the interpolate command
pub fn run<W: Write>(args: &InterpolateArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let kind = match &args.kind {
        Some(kind) => parse_kind(kind)?,
        None => config.kind,
    };
    if args.extrapolate && kind != InterpolationKind::Linear {
        return Err(CliError::InvalidArgument(format!(
            "extrapolation is linear only, got --kind {}",
            kind
        )));
    }

    let sample_axis = split_axis(&args.x);
    let labels = split_axis(&args.at);
    let values = normalize(&split_axis(&args.y), false)?;
    let extender = ExtrapolationExtender::new().with_warning(config.extrapolation_warning);

    info!(
        samples = sample_axis.len(),
        queries = labels.len(),
        %kind,
        extrapolate = args.extrapolate,
        datetime = args.datetime,
        "Interpolating"
    );

    let ys = if args.datetime {
        let xs: Vec<AxisValue> = to_axis(&sample_axis);
        let query: Vec<AxisValue> = to_axis(&labels);
        if args.extrapolate {
            extrapolate_by_datetime_with(&extender, &xs, &values, &query)?
        } else {
            interpolate_by_datetime(&xs, &values, &query, kind)?
        }
    } else {
        let xs = normalize(&sample_axis, false)?;
        let query = normalize(&labels, false)?;
        if args.extrapolate {
            extender.evaluate(&xs, &values, &query)?
        } else {
            evaluate(&xs, &values, &query, kind)?
        }
    };

    match config.output {
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = labels
                .iter()
                .zip(&ys)
                .map(|(x, y)| vec![x.clone(), y.to_string()])
                .collect();
            write_table(out, &["x", "y"], &rows)?;
        }
        OutputFormat::Json => {
            let report = InterpolationOutput {
                kind,
                extrapolate: args.extrapolate,
                points: labels
                    .iter()
                    .zip(&ys)
                    .map(|(x, &y)| Point { x: x.as_str(), y })
                    .collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
