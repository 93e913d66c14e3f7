//! Conversion of heterogeneous axes to numeric sequences.

use tracing::trace;

use crate::types::{AxisValue, ParseError};

/// Maps caller-supplied axis values onto the reals the numeric core uses.
///
/// Stateless. [`AxisNormalizer::normalize`] is the calendar mapping: every
/// element is coerced to an [`Instant`](crate::types::Instant) and then to
/// Unix epoch seconds (UTC). [`AxisNormalizer::normalize_numeric`] skips the
/// calendar and coerces each element straight to a real number.
///
/// # Examples
///
/// ```
/// use interp_core::calendar::AxisNormalizer;
/// use interp_core::types::{AxisValue, Date};
///
/// let axis: Vec<AxisValue> = vec![
///     Date::from_ymd(1970, 1, 2).unwrap().into(),
///     "1970-01-02 00:01:00".into(),
///     86_460.5.into(),
/// ];
/// assert_eq!(
///     AxisNormalizer::normalize(&axis).unwrap(),
///     vec![86_400.0, 86_460.0, 86_460.5]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisNormalizer;

impl AxisNormalizer {
    /// Epoch seconds of every element, in order.
    ///
    /// # Errors
    ///
    /// The first element that cannot be read as an instant aborts the whole
    /// conversion with its `ParseError`.
    pub fn normalize(values: &[AxisValue]) -> Result<Vec<f64>, ParseError> {
        let out = values
            .iter()
            .map(|value| value.to_instant().map(|t| t.to_epoch_seconds()))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(len = out.len(), "normalised calendar axis");
        Ok(out)
    }

    /// Real-number value of every element, in order.
    ///
    /// Dates become day ordinals here, not epoch seconds, so calendar axes
    /// belong in [`AxisNormalizer::normalize`].
    pub fn normalize_numeric(values: &[AxisValue]) -> Result<Vec<f64>, ParseError> {
        values.iter().map(AxisValue::to_real).collect()
    }
}
