//! # interp_core: Extrapolating Interpolation and Reliability Estimation
//!
//! interp_core interpolates a sampled one-dimensional function onto new
//! query coordinates and estimates how far each query point is from real
//! data:
//! - Strict-domain piecewise interpolation, linear or natural cubic
//!   (`math::interpolators`)
//! - Linear extrapolation beyond the sample range via virtual boundary
//!   samples (`math::interpolators::ExtrapolationExtender`)
//! - Nearest-sample distance and reliability flags (`math::reliability`)
//! - A date/time front end that normalises calendar axes to epoch seconds
//!   (`calendar`)
//! - Calendar and value types: `Instant`, `Date`, `AxisValue` (`types`)
//! - Error types: `InterpolationError`, `ParseError`, `DateError`,
//!   `CalendarError` (`types::error`)
//!
//! ## Dependencies
//!
//! - num-traits: Generic `Float` numerics (`f64` and `f32`)
//! - chrono: Calendar arithmetic
//! - thiserror: Error enums
//! - tracing: Diagnostic events (extrapolation warnings, classification summaries)
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::extrapolate;
//! use interp_core::math::reliability::exam_reliability;
//!
//! let xs = [1.0, 2.0, 3.0];
//! let ys = [1.0, 2.0, 3.0];
//! let query = [0.0, 1.0, 2.0, 3.0, 4.0];
//!
//! let values = extrapolate(&xs, &ys, &query).unwrap();
//! assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
//!
//! let trusted = exam_reliability(&xs, &query, 0.5, 1e-6).unwrap();
//! assert_eq!(trusted, vec![false, true, true, true, false]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Instant`, `Date`,
//!   `InterpolationKind`, `ReliabilityThreshold`, `ReliabilityReport` and
//!   `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod math;
pub mod types;
