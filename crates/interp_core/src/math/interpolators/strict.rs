//! Strict-domain interpolation in linear or cubic mode.
//!
//! [`StrictInterpolant`] is the single seam through which both direct callers
//! and [`super::ExtrapolationExtender`] reach the piecewise interpolators.
//! Every query must lie inside the sample range.

use std::fmt;
use std::str::FromStr;

use super::{CubicSplineInterpolator, Interpolator, LinearInterpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise interpolation mode.
///
/// # Examples
///
/// ```
/// use interp_core::math::interpolators::InterpolationKind;
///
/// let kind: InterpolationKind = "spline".parse().unwrap();
/// assert_eq!(kind, InterpolationKind::Cubic);
/// assert_eq!(kind.min_points(), 4);
/// assert_eq!(InterpolationKind::default().to_string(), "linear");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InterpolationKind {
    /// Piecewise linear.
    #[default]
    Linear,
    /// Natural cubic spline.
    Cubic,
}

impl InterpolationKind {
    /// Lower-case name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationKind::Linear => "linear",
            InterpolationKind::Cubic => "cubic",
        }
    }

    /// Minimum number of samples the mode needs.
    pub fn min_points(&self) -> usize {
        match self {
            InterpolationKind::Linear => 2,
            InterpolationKind::Cubic => 4,
        }
    }
}

impl FromStr for InterpolationKind {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(InterpolationKind::Linear),
            "cubic" | "spline" => Ok(InterpolationKind::Cubic),
            other => Err(InterpolationError::InvalidInput(format!(
                "Unknown interpolation kind: {}. Supported: linear, cubic",
                other
            ))),
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A constructed strict-domain interpolant of either kind.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{InterpolationKind, Interpolator, StrictInterpolant};
///
/// let interp = StrictInterpolant::new(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], InterpolationKind::Linear).unwrap();
/// assert_eq!(interp.kind(), InterpolationKind::Linear);
/// assert_eq!(interp.interpolate(2.5).unwrap(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub enum StrictInterpolant<T: Float> {
    /// Piecewise linear interpolant.
    Linear(LinearInterpolator<T>),
    /// Natural cubic spline interpolant.
    Cubic(CubicSplineInterpolator<T>),
}

impl<T: Float> StrictInterpolant<T> {
    /// Build the interpolant for `kind` over the given samples.
    pub fn new(xs: &[T], ys: &[T], kind: InterpolationKind) -> Result<Self, InterpolationError> {
        match kind {
            InterpolationKind::Linear => LinearInterpolator::new(xs, ys).map(Self::Linear),
            InterpolationKind::Cubic => CubicSplineInterpolator::new(xs, ys).map(Self::Cubic),
        }
    }

    /// Mode of this interpolant.
    pub fn kind(&self) -> InterpolationKind {
        match self {
            StrictInterpolant::Linear(_) => InterpolationKind::Linear,
            StrictInterpolant::Cubic(_) => InterpolationKind::Cubic,
        }
    }
}

impl<T: Float> Interpolator<T> for StrictInterpolant<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        match self {
            StrictInterpolant::Linear(inner) => inner.interpolate(x),
            StrictInterpolant::Cubic(inner) => inner.interpolate(x),
        }
    }

    fn domain(&self) -> (T, T) {
        match self {
            StrictInterpolant::Linear(inner) => inner.domain(),
            StrictInterpolant::Cubic(inner) => inner.domain(),
        }
    }
}

/// Interpolate `query_axis` over the samples in one call.
///
/// Every query must lie within `[sample_axis[0], sample_axis[last]]`; the
/// first one that does not yields [`InterpolationError::OutOfBounds`]. An
/// empty query axis still validates the samples.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{evaluate, InterpolationKind};
///
/// let ys = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[1.0, 1.5, 3.0], InterpolationKind::Linear).unwrap();
/// assert_eq!(ys, vec![1.0, 1.5, 3.0]);
///
/// assert!(evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[4.0], InterpolationKind::Linear).is_err());
/// ```
pub fn evaluate<T: Float>(
    sample_axis: &[T],
    sample_values: &[T],
    query_axis: &[T],
    kind: InterpolationKind,
) -> Result<Vec<T>, InterpolationError> {
    StrictInterpolant::new(sample_axis, sample_values, kind)?.interpolate_many(query_axis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("linear".parse::<InterpolationKind>().unwrap(), InterpolationKind::Linear);
        assert_eq!(" Cubic ".parse::<InterpolationKind>().unwrap(), InterpolationKind::Cubic);
        assert!(matches!(
            "quadratic".parse::<InterpolationKind>(),
            Err(InterpolationError::InvalidInput(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&InterpolationKind::Cubic).unwrap(),
            "\"cubic\""
        );
        let kind: InterpolationKind = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(kind, InterpolationKind::Linear);
    }

    #[test]
    fn test_new_dispatches_on_kind() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 4.0, 9.0];
        let linear = StrictInterpolant::new(&xs, &ys, InterpolationKind::Linear).unwrap();
        let cubic = StrictInterpolant::new(&xs, &ys, InterpolationKind::Cubic).unwrap();

        assert_eq!(linear.kind(), InterpolationKind::Linear);
        assert_eq!(cubic.kind(), InterpolationKind::Cubic);
        assert_relative_eq!(linear.interpolate(1.5).unwrap(), 2.5, epsilon = 1e-12);
        assert!((cubic.interpolate(1.5).unwrap() - 2.5).abs() > 1e-6);
        assert_eq!(linear.domain(), cubic.domain());
    }

    #[test]
    fn test_cubic_needs_four_points() {
        let result = StrictInterpolant::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], InterpolationKind::Cubic);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::InsufficientData { got: 3, need: 4 }
        );
    }

    #[test]
    fn test_evaluate_identity_at_samples() {
        let xs = [0.0, 0.5, 2.0, 2.5, 4.0];
        let ys = [1.0, -1.0, 3.0, 0.25, 2.0];
        for kind in [InterpolationKind::Linear, InterpolationKind::Cubic] {
            assert_eq!(evaluate(&xs, &ys, &xs, kind).unwrap(), ys.to_vec(), "{}", kind);
        }
    }

    #[test]
    fn test_evaluate_empty_query() {
        let out: Vec<f64> = evaluate(&[0.0, 1.0], &[0.0, 1.0], &[], InterpolationKind::Linear).unwrap();
        assert!(out.is_empty());
    }
}
