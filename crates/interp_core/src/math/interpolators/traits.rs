//! Interpolator trait definition.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for one-dimensional strict-domain interpolators.
///
/// Implementations answer queries inside `domain()` only; anything outside
/// (including NaN) is an [`InterpolationError::OutOfBounds`].
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 10.0, 20.0]).unwrap();
/// let ys = interp.interpolate_many(&[0.5, 1.5]).unwrap();
/// assert_eq!(ys, vec![5.0, 15.0]);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate a single value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Inclusive `(x_min, x_max)` range of valid queries.
    fn domain(&self) -> (T, T);

    /// Interpolate every point of `xs`, failing on the first invalid query.
    fn interpolate_many(&self, xs: &[T]) -> Result<Vec<T>, InterpolationError> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }

    /// Whether `x` lies inside the domain. NaN is never contained.
    #[inline]
    fn contains(&self, x: T) -> bool {
        let (lo, hi) = self.domain();
        x >= lo && x <= hi
    }
}
