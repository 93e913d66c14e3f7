//! Input checks shared by the interpolators, the extrapolation extender and
//! the reliability estimator.

use std::cmp::Ordering;

use crate::types::InterpolationError;
use num_traits::Float;

/// Check that `xs`/`ys` pair up, hold at least `need` points, and that `xs`
/// is strictly increasing.
pub(crate) fn check_samples<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }

    check_strictly_increasing(xs)
}

/// Strict ordering; NaN anywhere fails the comparison and is reported.
pub(crate) fn check_strictly_increasing<T: Float>(xs: &[T]) -> Result<(), InterpolationError> {
    match xs.windows(2).position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less)) {
        Some(i) => Err(InterpolationError::NonMonotonicData { index: i + 1 }),
        None => Ok(()),
    }
}

/// Index of the first element smaller than its predecessor, if any. A NaN
/// on either side of a pair counts as a descent.
pub(crate) fn first_descent<T: Float>(xs: &[T]) -> Option<usize> {
    xs.windows(2)
        .position(|w| {
            !matches!(
                w[0].partial_cmp(&w[1]),
                Some(Ordering::Less | Ordering::Equal)
            )
        })
        .map(|i| i + 1)
}

/// Build an `OutOfBounds` error from generic floats.
pub(crate) fn out_of_bounds<T: Float>(x: T, min: T, max: T) -> InterpolationError {
    InterpolationError::OutOfBounds {
        x: x.to_f64().unwrap_or(f64::NAN),
        min: min.to_f64().unwrap_or(f64::NAN),
        max: max.to_f64().unwrap_or(f64::NAN),
    }
}
