//! Core value, calendar, and error types.
//!
//! This module provides:
//! - `time`: Calendar types (`Instant`, `Date`) and epoch-second conversions
//! - `value`: The `AxisValue` tagged union and its numeric/instant coercions
//! - `error`: Structured error types for interpolation, parsing and calendars
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Instant`], [`Date`], [`duration_seconds`] from `time`
//! - [`AxisValue`] from `value`
//! - [`InterpolationError`], [`ParseError`], [`DateError`], [`CalendarError`] from `error`

pub mod error;
pub mod time;
pub mod value;

pub use error::{CalendarError, DateError, InterpolationError, ParseError};
pub use time::{duration_seconds, Date, Instant};
pub use value::AxisValue;
