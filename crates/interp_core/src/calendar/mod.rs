//! Date/time front end to the numeric core.
//!
//! Calendar axes are normalised to Unix epoch seconds (UTC) by
//! [`AxisNormalizer`] and then interpolated or classified exactly like
//! numeric axes. Reliability thresholds are durations, compared in seconds
//! with zero precision tolerance.

mod datetime;
mod normalizer;

pub use datetime::{
    exam_reliability_by_datetime, extrapolate_by_datetime, extrapolate_by_datetime_with,
    interpolate_by_datetime, reliability_report_by_datetime,
};
pub use normalizer::AxisNormalizer;
