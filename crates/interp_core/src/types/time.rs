//! Calendar types for the date/time axis path.
//!
//! This module provides:
//! - `Instant`: UTC timestamp wrapper around chrono::NaiveDateTime
//! - `Date`: Calendar date wrapper around chrono::NaiveDate
//! - `duration_seconds`: Total seconds of a chrono duration as `f64`
//!
//! Instants are always interpreted as UTC. Conversions to and from Unix epoch
//! seconds are the canonical "instant to real number" mapping used by
//! [`crate::calendar::AxisNormalizer`].
//!
//! # Examples
//!
//! ```
//! use interp_core::types::time::Instant;
//!
//! let t0 = Instant::from_ymd_hms(2014, 1, 1, 0, 0, 10).unwrap();
//! let t1: Instant = "2014-01-01 00:00:20".parse().unwrap();
//!
//! assert_eq!(t1.to_epoch_seconds() - t0.to_epoch_seconds(), 10.0);
//! ```

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::{DateError, ParseError};

/// Date-time layouts tried in order by [`Instant::parse`] after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts, resolved to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// A point in time on the UTC calendar.
///
/// Thin wrapper over `NaiveDateTime` with the epoch-second conversions the
/// interpolation core works in.
///
/// # Examples
///
/// ```
/// use interp_core::types::time::Instant;
///
/// let t = Instant::from_epoch_seconds(1_388_534_410.0).unwrap();
/// assert_eq!(t.to_string(), "2014-01-01T00:00:10");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Instant(NaiveDateTime);

impl Instant {
    /// Creates an instant from calendar and clock components.
    ///
    /// # Returns
    /// `Err(DateError::InvalidDate)` for an impossible date,
    /// `Err(DateError::InvalidTime)` for an impossible time of day.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp_core::types::time::Instant;
    ///
    /// assert!(Instant::from_ymd_hms(2024, 2, 29, 12, 0, 0).is_ok());
    /// assert!(Instant::from_ymd_hms(2024, 2, 30, 12, 0, 0).is_err());
    /// assert!(Instant::from_ymd_hms(2024, 2, 1, 24, 0, 0).is_err());
    /// ```
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        let date = Date::from_ymd(year, month, day)?;
        date.into_inner()
            .and_hms_opt(hour, minute, second)
            .map(Instant)
            .ok_or(DateError::InvalidTime {
                hour,
                minute,
                second,
            })
    }

    /// Parses an instant from text.
    ///
    /// Accepts RFC 3339 (offsets are converted to UTC), ISO 8601 date-times
    /// with a space or `T` separator and optional fractional seconds, slash
    /// separated dates, and bare dates (resolved to midnight).
    ///
    /// # Examples
    ///
    /// ```
    /// use interp_core::types::time::Instant;
    ///
    /// let a = Instant::parse("2014-01-01T01:00:00+01:00").unwrap();
    /// let b = Instant::parse("2014-01-01 00:00:00").unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(Instant::parse("not a time").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let text = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Instant(dt.naive_utc()));
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(Instant(dt));
            }
        }

        Date::parse(text)
            .map(Date::at_midnight)
            .map_err(|_| ParseError::InvalidText(s.to_string()))
    }

    /// Creates an instant from (possibly fractional) Unix epoch seconds.
    ///
    /// Fractions are rounded to the nearest nanosecond.
    ///
    /// # Returns
    /// `Err(ParseError::OutOfRange)` if `seconds` is not finite or lies
    /// outside the calendar range chrono can represent.
    pub fn from_epoch_seconds(seconds: f64) -> Result<Self, ParseError> {
        if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
            return Err(ParseError::OutOfRange(seconds));
        }

        let mut whole = seconds.floor();
        let mut nanos = ((seconds - whole) * 1e9).round();
        if nanos >= 1e9 {
            whole += 1.0;
            nanos = 0.0;
        }

        DateTime::from_timestamp(whole as i64, nanos as u32)
            .map(|dt| Instant(dt.naive_utc()))
            .ok_or(ParseError::OutOfRange(seconds))
    }

    /// Returns Unix epoch seconds, including the sub-second fraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp_core::types::time::Instant;
    ///
    /// let epoch = Instant::from_ymd_hms(1970, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(epoch.to_epoch_seconds(), 0.0);
    /// ```
    pub fn to_epoch_seconds(&self) -> f64 {
        let utc = self.0.and_utc();
        utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9
    }

    /// Returns the calendar date of this instant.
    pub fn date(&self) -> Date {
        Date(self.0.date())
    }

    /// Returns the underlying NaiveDateTime.
    pub fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant(dt)
    }
}

impl Sub for Instant {
    type Output = chrono::Duration;

    /// Returns the signed duration between two instants.
    fn sub(self, other: Self) -> chrono::Duration {
        self.0 - other.0
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Instant::parse(s)
    }
}

impl fmt::Display for Instant {
    /// Formats as ISO 8601; fractional seconds appear only when non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.nanosecond() == 0 {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
        }
    }
}

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// # Examples
///
/// ```
/// use interp_core::types::time::Date;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end: Date = "2024-01-11".parse().unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYYMMDD`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let text = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
            .map(Date)
            .ok_or_else(|| ParseError::InvalidText(s.to_string()))
    }

    /// Proleptic Gregorian ordinal, where 0001-01-01 is day 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use interp_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(1, 1, 1).unwrap().ordinal(), 1);
    /// assert_eq!(Date::from_ymd(2014, 1, 1).unwrap().ordinal(), 735_234);
    /// ```
    pub fn ordinal(&self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// The instant at 00:00:00 on this date.
    pub fn at_midnight(self) -> Instant {
        Instant(self.0.and_time(chrono::NaiveTime::MIN))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Total seconds in a chrono duration, including the sub-second part.
///
/// # Examples
///
/// ```
/// use interp_core::types::time::duration_seconds;
///
/// assert_eq!(duration_seconds(chrono::Duration::seconds(20)), 20.0);
/// assert_eq!(duration_seconds(chrono::Duration::milliseconds(-1500)), -1.5);
/// ```
pub fn duration_seconds(duration: chrono::Duration) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Instant construction and parsing
    // ========================================

    #[test]
    fn test_from_ymd_hms_valid() {
        let t = Instant::from_ymd_hms(2014, 1, 1, 0, 10, 0).unwrap();
        assert_eq!(t.date(), Date::from_ymd(2014, 1, 1).unwrap());
    }

    #[test]
    fn test_from_ymd_hms_invalid_date() {
        assert_eq!(
            Instant::from_ymd_hms(2023, 2, 29, 0, 0, 0),
            Err(DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn test_from_ymd_hms_invalid_time() {
        assert_eq!(
            Instant::from_ymd_hms(2023, 2, 1, 10, 61, 0),
            Err(DateError::InvalidTime {
                hour: 10,
                minute: 61,
                second: 0
            })
        );
    }

    #[test]
    fn test_parse_supported_layouts() {
        let expected = Instant::from_ymd_hms(2014, 1, 1, 0, 10, 0).unwrap();
        for text in [
            "2014-01-01 00:10:00",
            "2014-01-01T00:10:00",
            "2014-01-01 00:10",
            "2014/01/01 00:10:00",
            "2014-01-01T00:10:00Z",
            "2014-01-01T09:10:00+09:00",
            "  2014-01-01 00:10:00  ",
        ] {
            assert_eq!(Instant::parse(text).unwrap(), expected, "layout {}", text);
        }
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let expected = Instant::from_ymd_hms(2014, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(Instant::parse("2014-01-01").unwrap(), expected);
        assert_eq!(Instant::parse("2014/01/01").unwrap(), expected);
        assert_eq!(Instant::parse("20140101").unwrap(), expected);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let t = Instant::parse("2014-01-01 00:00:00.250").unwrap();
        assert_relative_eq!(t.to_epoch_seconds(), 1_388_534_400.25, epsilon = 1e-6);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            Instant::parse("tomorrow"),
            Err(ParseError::InvalidText("tomorrow".to_string()))
        );
        assert!(Instant::parse("2014-13-01").is_err());
    }

    // ========================================
    // Epoch conversions
    // ========================================

    #[test]
    fn test_epoch_seconds_known_value() {
        let t = Instant::from_ymd_hms(2014, 1, 1, 0, 0, 10).unwrap();
        assert_eq!(t.to_epoch_seconds(), 1_388_534_410.0);
    }

    #[test]
    fn test_from_epoch_seconds_inverse() {
        let t = Instant::from_ymd_hms(2014, 1, 1, 0, 11, 25).unwrap();
        let back = Instant::from_epoch_seconds(t.to_epoch_seconds()).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_from_epoch_seconds_negative_fraction() {
        let t = Instant::from_epoch_seconds(-0.5).unwrap();
        assert_eq!(t.to_string(), "1969-12-31T23:59:59.500");
        assert_relative_eq!(t.to_epoch_seconds(), -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_from_epoch_seconds_rejects_non_finite() {
        assert!(matches!(
            Instant::from_epoch_seconds(f64::NAN),
            Err(ParseError::OutOfRange(_))
        ));
        assert_eq!(
            Instant::from_epoch_seconds(f64::INFINITY),
            Err(ParseError::OutOfRange(f64::INFINITY))
        );
        assert!(Instant::from_epoch_seconds(1e300).is_err());
    }

    #[test]
    fn test_instant_sub_and_display() {
        let a = Instant::from_ymd_hms(2014, 1, 1, 0, 10, 0).unwrap();
        let b = Instant::from_ymd_hms(2014, 1, 1, 0, 9, 35).unwrap();
        assert_eq!(duration_seconds(a - b), 25.0);
        assert_eq!(a.to_string(), "2014-01-01T00:10:00");
    }

    // ========================================
    // Date
    // ========================================

    #[test]
    fn test_date_components_and_ordinal() {
        let d = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 6, 15));
        assert_eq!(d.ordinal() - Date::from_ymd(2024, 6, 14).unwrap().ordinal(), 1);
        assert_eq!(d.to_string(), "2024-06-15");
    }

    #[test]
    fn test_date_invalid() {
        assert!(Date::from_ymd(2024, 2, 30).is_err());
        assert!("2024-02-30".parse::<Date>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let d = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2024-06-15\"");

        let t = Instant::from_ymd_hms(2014, 1, 1, 0, 0, 10).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_epoch_roundtrip_whole_seconds(secs in -2_000_000_000i64..4_000_000_000i64) {
                let t = Instant::from_epoch_seconds(secs as f64).unwrap();
                prop_assert_eq!(t.to_epoch_seconds(), secs as f64);
            }
        }
    }
}
