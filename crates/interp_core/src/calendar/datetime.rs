//! Interpolation and reliability over calendar axes.
//!
//! Each operation normalises its axes to epoch seconds and hands them to the
//! calendar-agnostic numeric core unchanged.

use super::AxisNormalizer;
use crate::math::interpolators::{evaluate, ExtrapolationExtender, InterpolationKind};
use crate::math::reliability::{ReliabilityEstimator, ReliabilityReport, ReliabilityThreshold};
use crate::types::{duration_seconds, AxisValue, CalendarError};

/// Strict-domain interpolation over a calendar axis.
///
/// Every query instant must lie within the sample instants.
///
/// # Example
///
/// ```
/// use interp_core::calendar::interpolate_by_datetime;
/// use interp_core::math::interpolators::InterpolationKind;
/// use interp_core::types::AxisValue;
///
/// let axis: Vec<AxisValue> = vec!["2014-01-01 00:00:10".into(), "2014-01-01 00:00:20".into()];
/// let query: Vec<AxisValue> = vec!["2014-01-01 00:00:15".into()];
///
/// let ys = interpolate_by_datetime(&axis, &[1.0, 2.0], &query, InterpolationKind::Linear).unwrap();
/// assert_eq!(ys, vec![1.5]);
/// ```
pub fn interpolate_by_datetime(
    sample_axis: &[AxisValue],
    sample_values: &[f64],
    query_axis: &[AxisValue],
    kind: InterpolationKind,
) -> Result<Vec<f64>, CalendarError> {
    let xs = AxisNormalizer::normalize(sample_axis)?;
    let query = AxisNormalizer::normalize(query_axis)?;
    Ok(evaluate(&xs, sample_values, &query, kind)?)
}

/// Linear interpolation over a calendar axis, extrapolating at both ends.
pub fn extrapolate_by_datetime(
    sample_axis: &[AxisValue],
    sample_values: &[f64],
    query_axis: &[AxisValue],
) -> Result<Vec<f64>, CalendarError> {
    extrapolate_by_datetime_with(
        &ExtrapolationExtender::default(),
        sample_axis,
        sample_values,
        query_axis,
    )
}

/// [`extrapolate_by_datetime`] with a configured extender.
pub fn extrapolate_by_datetime_with(
    extender: &ExtrapolationExtender,
    sample_axis: &[AxisValue],
    sample_values: &[f64],
    query_axis: &[AxisValue],
) -> Result<Vec<f64>, CalendarError> {
    let xs = AxisNormalizer::normalize(sample_axis)?;
    let query = AxisNormalizer::normalize(query_axis)?;
    Ok(extender.evaluate(&xs, sample_values, &query)?)
}

/// Reliability flags for calendar query points.
///
/// Distances are measured in seconds and compared exactly (precision `0`).
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use interp_core::calendar::exam_reliability_by_datetime;
/// use interp_core::types::AxisValue;
///
/// let axis: Vec<AxisValue> = vec!["2014-01-01 00:10:00".into(), "2014-01-01 00:11:00".into()];
/// let query: Vec<AxisValue> = vec!["2014-01-01 00:09:40".into(), "2014-01-01 00:10:30".into()];
///
/// let flags = exam_reliability_by_datetime(&axis, &query, Duration::seconds(20)).unwrap();
/// assert_eq!(flags, vec![true, false]);
/// ```
pub fn exam_reliability_by_datetime(
    sample_axis: &[AxisValue],
    query_axis: &[AxisValue],
    reliable_distance: chrono::Duration,
) -> Result<Vec<bool>, CalendarError> {
    reliability_report_by_datetime(sample_axis, query_axis, reliable_distance)
        .map(|report| report.reliable)
}

/// Distances (in seconds) and flags for calendar query points.
pub fn reliability_report_by_datetime(
    sample_axis: &[AxisValue],
    query_axis: &[AxisValue],
    reliable_distance: chrono::Duration,
) -> Result<ReliabilityReport, CalendarError> {
    let threshold = ReliabilityThreshold::calendar(duration_seconds(reliable_distance))?;
    let samples = AxisNormalizer::normalize(sample_axis)?;
    let queries = AxisNormalizer::normalize(query_axis)?;
    Ok(ReliabilityEstimator::new(threshold).report(&samples, &queries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Instant, InterpolationError, ParseError};
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    fn at(h: u32, m: u32, s: u32) -> AxisValue {
        Instant::from_ymd_hms(2014, 1, 1, h, m, s).unwrap().into()
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_extrapolate_by_datetime() {
        let axis = vec![at(0, 0, 10), at(0, 0, 20)];
        let query = vec![at(0, 0, 5), at(0, 0, 15), at(0, 0, 25)];

        let ys = extrapolate_by_datetime_with(
            &ExtrapolationExtender::new().with_warning(false),
            &axis,
            &[1.0, 2.0],
            &query,
        )
        .unwrap();

        for (got, want) in ys.iter().zip([0.5, 1.5, 2.5]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_interpolate_by_datetime_strict_domain() {
        let axis = vec![at(0, 0, 10), at(0, 0, 20)];
        let err = interpolate_by_datetime(&axis, &[1.0, 2.0], &[at(0, 0, 25)], InterpolationKind::Linear)
            .unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Interpolation(InterpolationError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_interpolate_by_datetime_cubic() {
        let axis = vec![at(0, 0, 0), at(0, 1, 0), at(0, 2, 0), at(0, 3, 0)];
        let values = [0.0, 1.0, 2.0, 3.0];
        let ys = interpolate_by_datetime(&axis, &values, &[at(0, 1, 30)], InterpolationKind::Cubic)
            .unwrap();
        assert_abs_diff_eq!(ys[0], 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let axis: Vec<AxisValue> = vec![at(0, 0, 10), "next tuesday".into()];
        let err = extrapolate_by_datetime(&axis, &[1.0, 2.0], &[at(0, 0, 12)]).unwrap_err();
        assert!(matches!(err, CalendarError::Parse(ParseError::InvalidText(_))));
    }

    // ========================================
    // Reliability
    // ========================================

    #[test]
    fn test_exam_reliability_by_datetime() {
        let axis = vec![at(0, 10, 0), at(0, 11, 0)];
        let query = vec![
            at(0, 9, 35),
            at(0, 9, 40),
            at(0, 9, 45),
            at(0, 10, 15),
            at(0, 10, 20),
            at(0, 10, 25),
            at(0, 10, 35),
            at(0, 10, 40),
            at(0, 10, 45),
            at(0, 11, 15),
            at(0, 11, 20),
            at(0, 11, 25),
        ];

        let report = reliability_report_by_datetime(&axis, &query, Duration::seconds(20)).unwrap();
        assert_eq!(
            report.distances,
            vec![25.0, 20.0, 15.0, 15.0, 20.0, 25.0, 25.0, 20.0, 15.0, 15.0, 20.0, 25.0]
        );
        assert_eq!(
            report.reliable,
            vec![
                false, true, true, true, true, false, false, true, true, true, true, false
            ]
        );
    }

    #[test]
    fn test_reliability_sub_second_threshold() {
        let axis = vec![at(0, 0, 0)];
        let query = vec![at(0, 0, 0), at(0, 0, 1)];
        let flags = exam_reliability_by_datetime(&axis, &query, Duration::milliseconds(999)).unwrap();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_negative_duration_rejected() {
        let axis = vec![at(0, 0, 0)];
        let err = exam_reliability_by_datetime(&axis, &axis, Duration::seconds(-1)).unwrap_err();
        assert!(matches!(
            err,
            CalendarError::Interpolation(InterpolationError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_unsorted_calendar_query() {
        let axis = vec![at(0, 0, 0), at(0, 1, 0)];
        let query = vec![at(0, 0, 30), at(0, 0, 10)];
        let err = exam_reliability_by_datetime(&axis, &query, Duration::seconds(5)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::Interpolation(InterpolationError::UnsortedQuery { index: 1 })
        );
    }
}
