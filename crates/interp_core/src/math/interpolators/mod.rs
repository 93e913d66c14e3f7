//! Interpolation methods for sampled one-dimensional functions.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between samples
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`StrictInterpolant`]: Either of the above, selected by [`InterpolationKind`]
//! - [`ExtrapolationExtender`]: Linear interpolation that also extrapolates
//!   beyond the sample range via virtual boundary samples
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! Interpolators are strict: queries outside `domain()` are errors. Sample
//! axes must be strictly increasing and are never re-sorted.
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{evaluate, extrapolate, InterpolationKind};
//!
//! let xs = [1.0, 2.0, 3.0];
//! let ys = [1.0, 2.0, 3.0];
//!
//! // Inside the sample range only
//! let inside = evaluate(&xs, &ys, &[1.5, 2.5], InterpolationKind::Linear).unwrap();
//! assert_eq!(inside, vec![1.5, 2.5]);
//!
//! // Anywhere, extrapolating linearly at the edges
//! let anywhere = extrapolate(&xs, &ys, &[0.0, 4.0]).unwrap();
//! assert_eq!(anywhere, vec![0.0, 4.0]);
//! ```

mod cubic_spline;
mod extrapolation;
mod linear;
mod strict;
mod traits;
mod validate;

pub use cubic_spline::CubicSplineInterpolator;
pub use extrapolation::{extrapolate, locate, AugmentedSamples, ExtrapolationExtender};
pub use linear::LinearInterpolator;
pub use strict::{evaluate, InterpolationKind, StrictInterpolant};
pub use traits::Interpolator;

pub(crate) use validate::first_descent;
