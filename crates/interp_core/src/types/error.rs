//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation, extrapolation and reliability checks
//! - `ParseError`: Errors from coercing axis values into numbers or instants
//! - `DateError`: Errors from calendar construction
//! - `CalendarError`: Union of the above for the date/time path

use std::fmt;
use thiserror::Error;

/// Interpolation-related errors.
///
/// Covers the domain errors (query outside the interpolable range, too few
/// samples), ordering errors on either axis, and rejected thresholds.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for the requested mode
/// - `NonMonotonicData`: Sample axis is not strictly increasing
/// - `UnsortedQuery`: Reliability query axis is not sorted ascending
/// - `InvalidThreshold`: Negative or NaN reliability threshold
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Sample axis is not strictly increasing.
    #[error("Sample axis is not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index of the first sample that does not exceed its predecessor
        index: usize,
    },

    /// Query axis is not sorted ascending where sorting is required.
    #[error("Query axis is not sorted ascending at index {index}")]
    UnsortedQuery {
        /// Index of the first query point smaller than its predecessor
        index: usize,
    },

    /// Reliability threshold component is negative or NaN.
    #[error("Invalid threshold: {name} = {value} (must be non-negative)")]
    InvalidThreshold {
        /// Which threshold component was rejected
        name: String,
        /// The rejected value
        value: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InterpolationError {
    /// Returns true for errors that stem from the interpolation domain
    /// (`OutOfBounds` or `InsufficientData`).
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            InterpolationError::OutOfBounds { .. } | InterpolationError::InsufficientData { .. }
        )
    }

    /// Returns true for axis ordering violations.
    pub fn is_order_error(&self) -> bool {
        matches!(
            self,
            InterpolationError::NonMonotonicData { .. } | InterpolationError::UnsortedQuery { .. }
        )
    }
}

/// Value coercion errors.
///
/// Raised when an axis element cannot be normalised to a real number or to a
/// calendar instant.
///
/// # Examples
/// ```
/// use interp_core::types::ParseError;
///
/// let err = ParseError::InvalidText("yesterday-ish".to_string());
/// assert_eq!(format!("{}", err), "Cannot parse 'yesterday-ish' as a number or timestamp");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Text is neither a recognised timestamp nor a number.
    #[error("Cannot parse '{0}' as a number or timestamp")]
    InvalidText(String),

    /// Text contains zero or several embedded numbers.
    #[error("Cannot extract a single number from '{text}': found {found}")]
    AmbiguousNumber {
        /// The offending text
        text: String,
        /// How many numeric runs were found
        found: usize,
    },

    /// Number outside the range of the requested target (calendar or integer).
    #[error("{0} is outside the representable range")]
    OutOfRange(f64),

    /// Value kind has no meaningful conversion to the requested target.
    #[error("A {kind} value cannot be converted to {target}")]
    Unsupported {
        /// Kind of the source value
        kind: &'static str,
        /// Requested target representation
        target: &'static str,
    },
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `InvalidTime`: Invalid time-of-day components
///
/// # Examples
/// ```
/// use interp_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Invalid time-of-day components.
    InvalidTime {
        /// Hour component (0-23)
        hour: u32,
        /// Minute component (0-59)
        minute: u32,
        /// Second component (0-59)
        second: u32,
    },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::InvalidTime {
                hour,
                minute,
                second,
            } => write!(f, "Invalid time: {:02}:{:02}:{:02}", hour, minute, second),
        }
    }
}

impl std::error::Error for DateError {}

/// Errors from the date/time interpolation and reliability path.
///
/// Either an axis element failed to normalise, or the numeric core rejected
/// the normalised axes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// Axis normalisation failed.
    #[error("Axis normalisation failed: {0}")]
    Parse(#[from] ParseError),

    /// Interpolation or reliability check failed.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}
