//! Linear extrapolation by virtual boundary samples.
//!
//! A strict-domain interpolant cannot answer queries outside its sample
//! range. [`ExtrapolationExtender`] widens the range just enough: when the
//! first query point lies left of the first sample, a virtual sample is
//! placed at that query point on the line through the two leftmost samples;
//! the right side is handled symmetrically with the last query point and the
//! two rightmost samples. The augmented samples are then handed to the linear
//! [`StrictInterpolant`](super::StrictInterpolant).
//!
//! Only the first and last query points drive range detection, so the query
//! axis is expected to be ordered. An unordered axis whose extremes sit in
//! the middle still fails with [`InterpolationError::OutOfBounds`].

use std::borrow::Cow;

use num_traits::Float;
use tracing::{debug, warn};

use super::strict::{evaluate, InterpolationKind};
use super::validate::check_samples;
use crate::types::InterpolationError;

/// Point on the line through `(x0, y0)` and `(x1, y1)` at abscissa `x`.
///
/// # Formula
///
/// ```text
/// y = y0 - (y0 - y1) * (x0 - x) / (x0 - x1)
/// ```
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::locate;
///
/// // Line y = 2x + 1 through (1, 3) and (2, 5)
/// assert_eq!(locate(1.0, 3.0, 2.0, 5.0, -1.0), -1.0);
/// assert_eq!(locate(1.0, 3.0, 2.0, 5.0, 4.0), 9.0);
/// ```
#[inline]
pub fn locate<T: Float>(x0: T, y0: T, x1: T, y1: T, x: T) -> T {
    y0 - (y0 - y1) * (x0 - x) / (x0 - x1)
}

/// Sample set widened to cover a query axis.
///
/// Borrows the caller's slices when no virtual point was needed.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSamples<'a, T: Float> {
    /// Sample axis including any virtual boundary points.
    pub xs: Cow<'a, [T]>,
    /// Sample values including any virtual boundary points.
    pub ys: Cow<'a, [T]>,
    /// Virtual point prepended on the left, if any.
    pub left: Option<(T, T)>,
    /// Virtual point appended on the right, if any.
    pub right: Option<(T, T)>,
}

impl<T: Float> AugmentedSamples<'_, T> {
    /// True when at least one virtual point was added.
    pub fn is_extended(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

/// Linear interpolation that also serves queries beyond the sample range.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::ExtrapolationExtender;
///
/// let extender = ExtrapolationExtender::new().with_warning(false);
/// let ys = extender
///     .evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0, 4.0])
///     .unwrap();
/// assert_eq!(ys, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtrapolationExtender {
    warn_on_extrapolation: bool,
}

impl Default for ExtrapolationExtender {
    /// Warnings enabled.
    fn default() -> Self {
        Self {
            warn_on_extrapolation: true,
        }
    }
}

impl ExtrapolationExtender {
    /// Extender with default settings (warnings enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `warn`-level event emitted when a call
    /// extrapolates.
    pub fn with_warning(mut self, enabled: bool) -> Self {
        self.warn_on_extrapolation = enabled;
        self
    }

    /// Whether extrapolating calls emit a warning.
    pub fn warns(&self) -> bool {
        self.warn_on_extrapolation
    }

    /// Widen the samples so that `[query.first, query.last]` is covered.
    ///
    /// # Errors
    ///
    /// * `InterpolationError::InvalidInput` - Mismatched sample lengths
    /// * `InterpolationError::InsufficientData` - Fewer than 2 samples
    /// * `InterpolationError::NonMonotonicData` - Sample axis not strictly increasing
    pub fn augment<'a, T: Float>(
        &self,
        xs: &'a [T],
        ys: &'a [T],
        query: &[T],
    ) -> Result<AugmentedSamples<'a, T>, InterpolationError> {
        check_samples(xs, ys, 2)?;

        let unchanged = AugmentedSamples {
            xs: Cow::Borrowed(xs),
            ys: Cow::Borrowed(ys),
            left: None,
            right: None,
        };
        let (Some(&q_first), Some(&q_last)) = (query.first(), query.last()) else {
            return Ok(unchanged);
        };

        let n = xs.len();
        let left = (q_first < xs[0]).then(|| (q_first, locate(xs[0], ys[0], xs[1], ys[1], q_first)));
        let right = (q_last > xs[n - 1])
            .then(|| (q_last, locate(xs[n - 1], ys[n - 1], xs[n - 2], ys[n - 2], q_last)));

        if left.is_none() && right.is_none() {
            return Ok(unchanged);
        }

        let mut ext_xs = Vec::with_capacity(n + 2);
        let mut ext_ys = Vec::with_capacity(n + 2);
        if let Some((x, y)) = left {
            debug!(x = x.to_f64(), y = y.to_f64(), "virtual left boundary sample");
            ext_xs.push(x);
            ext_ys.push(y);
        }
        ext_xs.extend_from_slice(xs);
        ext_ys.extend_from_slice(ys);
        if let Some((x, y)) = right {
            debug!(x = x.to_f64(), y = y.to_f64(), "virtual right boundary sample");
            ext_xs.push(x);
            ext_ys.push(y);
        }

        Ok(AugmentedSamples {
            xs: Cow::Owned(ext_xs),
            ys: Cow::Owned(ext_ys),
            left,
            right,
        })
    }

    /// Linearly interpolate, extrapolating beyond the sample range.
    ///
    /// An empty query axis returns an empty result without inspecting the
    /// samples.
    pub fn evaluate<T: Float>(
        &self,
        xs: &[T],
        ys: &[T],
        query: &[T],
    ) -> Result<Vec<T>, InterpolationError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let samples = self.augment(xs, ys, query)?;
        if samples.is_extended() && self.warn_on_extrapolation {
            warn!(
                left = samples.left.is_some(),
                right = samples.right.is_some(),
                "query axis exceeds the sample range; values are linearly extrapolated"
            );
        }

        evaluate(&samples.xs, &samples.ys, query, InterpolationKind::Linear)
    }
}

/// Linear interpolation with extrapolation, using a default extender.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::extrapolate;
///
/// let ys = extrapolate(&[0.0, 1.0], &[1.0, 3.0], &[-1.0, 0.5, 2.0]).unwrap();
/// assert_eq!(ys, vec![-1.0, 2.0, 5.0]);
/// ```
pub fn extrapolate<T: Float>(xs: &[T], ys: &[T], query: &[T]) -> Result<Vec<T>, InterpolationError> {
    ExtrapolationExtender::default().evaluate(xs, ys, query)
}
