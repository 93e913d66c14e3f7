//! Nearest-sample reliability classification.
//!
//! An interpolated (or extrapolated) value is only as trustworthy as the
//! closest real sample behind it. [`ReliabilityEstimator`] measures, for every
//! query point, the distance to the nearest sample and flags the point as
//! reliable when that distance is within a [`ReliabilityThreshold`].
//!
//! Both axes must be sorted ascending. A single forward pass over the two
//! axes gives amortized `O(samples + queries)` time.
//!
//! # Example
//!
//! ```
//! use interp_core::math::reliability::{ReliabilityEstimator, ReliabilityThreshold};
//!
//! let samples = [1.0, 2.0, 3.0, 4.0];
//! let queries = [0.4, 0.6, 1.7, 2.5, 3.3, 4.4, 4.5];
//! let threshold = ReliabilityThreshold::new(0.4).unwrap();
//!
//! let flags = ReliabilityEstimator::new(threshold).classify(&samples, &queries).unwrap();
//! assert_eq!(flags, vec![false, true, true, false, true, true, false]);
//! ```

use num_traits::Float;
use tracing::trace;

use super::interpolators::first_descent;
use crate::types::InterpolationError;

/// Default precision tolerance for numeric axes.
pub const DEFAULT_PRECISION: f64 = 1e-6;

/// Distance limit for trusting a query point.
///
/// A point at distance `d` from its nearest sample is reliable iff
/// `d - precision - reliable_distance <= 0`. The precision absorbs
/// floating-point noise such as `1.0 - 0.6 = 0.4000000000000001`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReliabilityThreshold {
    reliable_distance: f64,
    precision: f64,
}

impl ReliabilityThreshold {
    /// Threshold with the numeric default precision of `1e-6`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidThreshold` if `reliable_distance` is
    /// negative or NaN.
    pub fn new(reliable_distance: f64) -> Result<Self, InterpolationError> {
        Self::with_precision(reliable_distance, DEFAULT_PRECISION)
    }

    /// Threshold with an explicit precision tolerance.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::reliability::ReliabilityThreshold;
    ///
    /// assert!(ReliabilityThreshold::with_precision(0.5, 0.0).is_ok());
    /// assert!(ReliabilityThreshold::with_precision(-0.5, 0.0).is_err());
    /// assert!(ReliabilityThreshold::with_precision(0.5, f64::NAN).is_err());
    /// ```
    pub fn with_precision(reliable_distance: f64, precision: f64) -> Result<Self, InterpolationError> {
        check_non_negative("reliable_distance", reliable_distance)?;
        check_non_negative("precision", precision)?;
        Ok(Self {
            reliable_distance,
            precision,
        })
    }

    /// Threshold for calendar axes measured in seconds: exact, precision `0`.
    pub fn calendar(reliable_distance: f64) -> Result<Self, InterpolationError> {
        Self::with_precision(reliable_distance, 0.0)
    }

    /// Maximum trusted distance.
    pub fn reliable_distance(&self) -> f64 {
        self.reliable_distance
    }

    /// Precision tolerance.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Whether a point at `distance` from its nearest sample is reliable.
    #[inline]
    pub fn accepts(&self, distance: f64) -> bool {
        distance - self.precision - self.reliable_distance <= 0.0
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), InterpolationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InterpolationError::InvalidThreshold {
            name: name.to_string(),
            value,
        })
    }
}

/// Per-point distances and flags from one classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReliabilityReport {
    /// Distance from each query point to its nearest sample.
    pub distances: Vec<f64>,
    /// Reliability flag of each query point.
    pub reliable: Vec<bool>,
}

impl ReliabilityReport {
    /// Number of classified query points.
    pub fn len(&self) -> usize {
        self.reliable.len()
    }

    /// True when no query point was classified.
    pub fn is_empty(&self) -> bool {
        self.reliable.is_empty()
    }

    /// Number of reliable points.
    pub fn reliable_count(&self) -> usize {
        self.reliable.iter().filter(|&&flag| flag).count()
    }
}

/// Classifies query points by distance to the nearest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliabilityEstimator {
    threshold: ReliabilityThreshold,
}

impl ReliabilityEstimator {
    /// Estimator for the given threshold.
    pub fn new(threshold: ReliabilityThreshold) -> Self {
        Self { threshold }
    }

    /// Threshold in use.
    pub fn threshold(&self) -> ReliabilityThreshold {
        self.threshold
    }

    /// Reliability flag for every query point, index-aligned with `queries`.
    pub fn classify<T: Float>(
        &self,
        samples: &[T],
        queries: &[T],
    ) -> Result<Vec<bool>, InterpolationError> {
        self.report(samples, queries).map(|report| report.reliable)
    }

    /// Distances and flags for every query point.
    pub fn report<T: Float>(
        &self,
        samples: &[T],
        queries: &[T],
    ) -> Result<ReliabilityReport, InterpolationError> {
        let distances: Vec<f64> = nearest_sample_distances(samples, queries)?
            .into_iter()
            .map(|d| d.to_f64().unwrap_or(f64::NAN))
            .collect();
        let reliable: Vec<bool> = distances.iter().map(|&d| self.threshold.accepts(d)).collect();

        trace!(
            queries = reliable.len(),
            reliable = reliable.iter().filter(|&&flag| flag).count(),
            reliable_distance = self.threshold.reliable_distance,
            precision = self.threshold.precision,
            "classified query axis"
        );

        Ok(ReliabilityReport {
            distances,
            reliable,
        })
    }
}

/// Distance from each query point to its nearest sample.
///
/// Walks the samples with a forward-only cursor. For a query `t`, `left` is
/// the last consumed sample `<= t` and `right` the first unconsumed sample
/// `> t`. Equal distances resolve to the left side. With no sample on the
/// left, the right distance is used; with none on either side (no samples at
/// all) the distance is infinite.
///
/// # Errors
///
/// `InterpolationError::NonMonotonicData` if `samples` descends anywhere and
/// `InterpolationError::UnsortedQuery` if `queries` does. Repeated values are
/// allowed on both axes.
///
/// # Example
///
/// ```
/// use interp_core::math::reliability::nearest_sample_distances;
///
/// let d = nearest_sample_distances(&[1.0, 3.0], &[0.0, 2.0, 3.0, 5.0]).unwrap();
/// assert_eq!(d, vec![1.0, 1.0, 0.0, 2.0]);
/// ```
pub fn nearest_sample_distances<T: Float>(
    samples: &[T],
    queries: &[T],
) -> Result<Vec<T>, InterpolationError> {
    if let Some(index) = first_descent(samples) {
        return Err(InterpolationError::NonMonotonicData { index });
    }
    if let Some(index) = first_descent(queries) {
        return Err(InterpolationError::UnsortedQuery { index });
    }

    let mut cursor = 0;
    let mut left: Option<T> = None;
    let mut distances = Vec::with_capacity(queries.len());

    for &t in queries {
        while cursor < samples.len() && samples[cursor] <= t {
            left = Some(samples[cursor]);
            cursor += 1;
        }
        let right = samples.get(cursor).copied();

        let distance = match (left, right) {
            (Some(l), Some(r)) => {
                let (to_left, to_right) = (t - l, r - t);
                if to_left <= to_right {
                    to_left
                } else {
                    to_right
                }
            }
            (Some(l), None) => t - l,
            (None, Some(r)) => r - t,
            (None, None) => T::infinity(),
        };
        distances.push(distance);
    }

    Ok(distances)
}

/// Reliability flags with a numeric threshold and explicit precision.
///
/// # Example
///
/// ```
/// use interp_core::math::reliability::exam_reliability;
///
/// let flags = exam_reliability(&[1.0, 2.0], &[1.2, 1.5, 2.0], 0.3, 1e-6).unwrap();
/// assert_eq!(flags, vec![true, false, true]);
/// ```
pub fn exam_reliability<T: Float>(
    samples: &[T],
    queries: &[T],
    reliable_distance: f64,
    precision: f64,
) -> Result<Vec<bool>, InterpolationError> {
    let threshold = ReliabilityThreshold::with_precision(reliable_distance, precision)?;
    ReliabilityEstimator::new(threshold).classify(samples, queries)
}
