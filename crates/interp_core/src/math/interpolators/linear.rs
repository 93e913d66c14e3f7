//! Linear interpolation implementation.

use super::validate::{check_samples, out_of_bounds};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Holds a strictly increasing sample axis and its values and interpolates
/// linearly between adjacent samples. Queries outside the sample range are
/// rejected; use [`super::ExtrapolationExtender`] to serve them.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Minimum number of samples.
    pub const MIN_POINTS: usize = 2;

    /// Construct a linear interpolator from a sample axis and its values.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(LinearInterpolator::new(&[0.0], &[0.0]).is_err());
    /// assert!(LinearInterpolator::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        check_samples(xs, ys, Self::MIN_POINTS)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Sample axis.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Sample values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` with `xs[i] <= x < xs[i+1]`, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.clamp(1, self.xs.len() - 1) - 1
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    ///
    /// Knot points return the stored value exactly.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if !self.contains(x) {
            return Err(out_of_bounds(x, x_min, x_max));
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        if x == x0 {
            return Ok(y0);
        }
        if x == x1 {
            return Ok(y1);
        }

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
