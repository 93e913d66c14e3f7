//! Natural cubic spline interpolation.

use super::validate::{check_samples, out_of_bounds};
use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    a: T,
    b: T,
    c: T,
    d: T,
}

/// Natural cubic spline interpolator with C² continuity.
///
/// The second derivative vanishes at both ends of the sample axis. Four or
/// more strictly increasing samples are required.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Interpolator, CubicSplineInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.interpolate(2.0).unwrap(), 4.0);
/// assert!(interp.interpolate(3.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
    coeffs: Vec<SplineCoeffs<T>>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Minimum number of samples.
    pub const MIN_POINTS: usize = 4;

    /// Construct a natural cubic spline from a sample axis and its values.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 4 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        check_samples(xs, ys, Self::MIN_POINTS)?;
        let coeffs = Self::compute_coefficients(xs, ys);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            coeffs,
        })
    }

    /// Solve the tridiagonal system for the knot second derivatives with the
    /// Thomas algorithm, then expand each segment into polynomial form.
    fn compute_coefficients(xs: &[T], ys: &[T]) -> Vec<SplineCoeffs<T>> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();
        let six = T::from(6.0).unwrap();

        let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let slope: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        // Row r couples the second derivatives of knots r, r+1, r+2.
        let m = n - 2;
        let mut c_prime: Vec<T> = Vec::with_capacity(m);
        let mut d_prime: Vec<T> = Vec::with_capacity(m);
        for r in 0..m {
            let sub = h[r];
            let diag = two * (h[r] + h[r + 1]);
            let sup = h[r + 1];
            let rhs = six * (slope[r + 1] - slope[r]);

            if r == 0 {
                c_prime.push(sup / diag);
                d_prime.push(rhs / diag);
            } else {
                let denom = diag - sub * c_prime[r - 1];
                c_prime.push(sup / denom);
                d_prime.push((rhs - sub * d_prime[r - 1]) / denom);
            }
        }

        // Natural boundary: second derivative is zero at both ends.
        let mut second = vec![T::zero(); n];
        second[m] = d_prime[m - 1];
        for r in (0..m - 1).rev() {
            second[r + 1] = d_prime[r] - c_prime[r] * second[r + 2];
        }

        (0..n - 1)
            .map(|i| SplineCoeffs {
                a: ys[i],
                b: slope[i] - h[i] * (two * second[i] + second[i + 1]) / six,
                c: second[i] / two,
                d: (second[i + 1] - second[i]) / (six * h[i]),
            })
            .collect()
    }

    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.clamp(1, self.xs.len() - 1) - 1
    }

    /// Sample axis.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
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
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Evaluate the spline at `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if !self.contains(x) {
            return Err(out_of_bounds(x, x_min, x_max));
        }
        if x == x_max {
            return Ok(self.ys[self.ys.len() - 1]);
        }

        let i = self.find_segment(x);
        let k = &self.coeffs[i];
        let dx = x - self.xs[i];

        Ok(k.a + dx * (k.b + dx * (k.c + dx * k.d)))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
