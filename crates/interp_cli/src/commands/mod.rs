//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the writer they are given and log progress through `tracing`.

pub mod check;
pub mod interpolate;
pub mod reliability;

mod output;

use interp_core::calendar::AxisNormalizer;
use interp_core::types::AxisValue;

use crate::Result;

/// Split a comma-separated axis argument into trimmed, non-empty elements.
pub fn split_axis(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn to_axis(elements: &[String]) -> Vec<AxisValue> {
    elements.iter().map(|s| AxisValue::from(s.as_str())).collect()
}

/// Numeric axis from raw elements; `datetime` selects epoch seconds.
fn normalize(elements: &[String], datetime: bool) -> Result<Vec<f64>> {
    let axis = to_axis(elements);
    let values = if datetime {
        AxisNormalizer::normalize(&axis)?
    } else {
        AxisNormalizer::normalize_numeric(&axis)?
    };
    Ok(values)
}
