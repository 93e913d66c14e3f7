//! Heterogeneous axis values and their coercion to numbers and instants.
//!
//! An axis handed to the date/time path may mix plain numbers, text and
//! calendar values. [`AxisValue`] is the tagged union over those kinds, and
//! its two coercions define how each kind maps onto the numeric core:
//!
//! | kind       | `to_instant()`                 | `to_real()`                  |
//! |------------|--------------------------------|------------------------------|
//! | `Integer`  | epoch seconds                  | the value                    |
//! | `Real`     | epoch seconds                  | the value                    |
//! | `Text`     | parsed timestamp, else number  | parsed or extracted number   |
//! | `Instant`  | itself                         | epoch seconds                |
//! | `Date`     | midnight                       | proleptic Gregorian ordinal  |
//! | `Duration` | error                          | total seconds                |
//!
//! Two narrower coercions sit beside them. `to_int()` rounds `to_real()` to
//! the nearest integer (dates stay exact ordinals). `to_date()` reads
//! integers, and integral reals, as proleptic ordinals; text as a date or a
//! timestamp; instants as their date part. Fractional reals and durations
//! have no date.

use chrono::{NaiveDate, NaiveDateTime};

use super::error::ParseError;
use super::time::{duration_seconds, Date, Instant};

/// A single coordinate as supplied by a caller.
///
/// # Examples
///
/// ```
/// use interp_core::types::AxisValue;
///
/// let values: Vec<AxisValue> = vec![
///     "2014-01-01 00:00:10".into(),
///     1_388_534_420_i64.into(),
/// ];
/// let secs: Vec<f64> = values
///     .iter()
///     .map(|v| v.to_instant().map(|t| t.to_epoch_seconds()))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(secs, vec![1_388_534_410.0, 1_388_534_420.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValue {
    /// Integral number.
    Integer(i64),
    /// Real number.
    Real(f64),
    /// Free text: a timestamp or a number.
    Text(String),
    /// UTC calendar instant.
    Instant(Instant),
    /// Calendar date.
    Date(Date),
    /// Signed time span.
    Duration(chrono::Duration),
}

impl AxisValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AxisValue::Integer(_) => "integer",
            AxisValue::Real(_) => "real",
            AxisValue::Text(_) => "text",
            AxisValue::Instant(_) => "instant",
            AxisValue::Date(_) => "date",
            AxisValue::Duration(_) => "duration",
        }
    }

    /// Normalise to a calendar instant.
    ///
    /// Numbers are read as Unix epoch seconds. Text is parsed as a timestamp
    /// first and as numeric epoch seconds second. Dates resolve to midnight.
    ///
    /// # Errors
    ///
    /// - `ParseError::InvalidText` for text that is neither
    /// - `ParseError::OutOfRange` for numbers outside the calendar range
    /// - `ParseError::Unsupported` for durations
    pub fn to_instant(&self) -> Result<Instant, ParseError> {
        match self {
            AxisValue::Integer(n) => Instant::from_epoch_seconds(*n as f64),
            AxisValue::Real(x) => Instant::from_epoch_seconds(*x),
            AxisValue::Text(text) => Instant::parse(text).or_else(|err| {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| err)
                    .and_then(Instant::from_epoch_seconds)
            }),
            AxisValue::Instant(t) => Ok(*t),
            AxisValue::Date(d) => Ok(d.at_midnight()),
            AxisValue::Duration(_) => Err(ParseError::Unsupported {
                kind: self.kind(),
                target: "an instant",
            }),
        }
    }

    /// Normalise to a real number.
    ///
    /// Text is parsed as a float; failing that, exactly one number embedded
    /// in the text is accepted (`"about 3.5 kg"` gives `3.5`).
    ///
    /// # Errors
    ///
    /// `ParseError::AmbiguousNumber` when text holds zero or several numbers.
    pub fn to_real(&self) -> Result<f64, ParseError> {
        match self {
            AxisValue::Integer(n) => Ok(*n as f64),
            AxisValue::Real(x) => Ok(*x),
            AxisValue::Text(text) => {
                if let Ok(x) = text.trim().parse::<f64>() {
                    return Ok(x);
                }
                match extract_numbers(text).as_slice() {
                    [only] => Ok(*only),
                    found => Err(ParseError::AmbiguousNumber {
                        text: text.clone(),
                        found: found.len(),
                    }),
                }
            }
            AxisValue::Instant(t) => Ok(t.to_epoch_seconds()),
            AxisValue::Date(d) => Ok(d.ordinal() as f64),
            AxisValue::Duration(span) => Ok(duration_seconds(*span)),
        }
    }

    /// Normalise to an integer, rounding half away from zero.
    ///
    /// # Errors
    ///
    /// - whatever [`to_real`](Self::to_real) reports
    /// - `ParseError::OutOfRange` when the rounded value does not fit `i64`
    pub fn to_int(&self) -> Result<i64, ParseError> {
        match self {
            AxisValue::Integer(n) => Ok(*n),
            AxisValue::Date(d) => Ok(d.ordinal()),
            _ => {
                let x = self.to_real()?.round();
                // -2^63 and 2^63 are exact in f64; the upper bound is exclusive.
                if x.is_finite() && x >= i64::MIN as f64 && x < i64::MAX as f64 {
                    Ok(x as i64)
                } else {
                    Err(ParseError::OutOfRange(x))
                }
            }
        }
    }

    /// Normalise to a calendar date.
    ///
    /// Integers are proleptic Gregorian ordinals (0001-01-01 is day 1), the
    /// inverse of [`Date::ordinal`]. Text is parsed as a date first and as
    /// anything [`to_instant`](Self::to_instant) accepts second.
    ///
    /// # Errors
    ///
    /// - `ParseError::OutOfRange` for ordinals chrono cannot represent
    /// - `ParseError::InvalidText` for unparsable text
    /// - `ParseError::Unsupported` for fractional reals and durations
    pub fn to_date(&self) -> Result<Date, ParseError> {
        match self {
            AxisValue::Integer(n) => date_from_ordinal(*n),
            AxisValue::Real(x) if x.fract() == 0.0 => date_from_ordinal(self.to_int()?),
            AxisValue::Real(_) | AxisValue::Duration(_) => Err(ParseError::Unsupported {
                kind: self.kind(),
                target: "a date",
            }),
            AxisValue::Text(text) => {
                Date::parse(text).or_else(|_| self.to_instant().map(|t| t.date()))
            }
            AxisValue::Instant(t) => Ok(t.date()),
            AxisValue::Date(d) => Ok(*d),
        }
    }
}

fn date_from_ordinal(ordinal: i64) -> Result<Date, ParseError> {
    i32::try_from(ordinal)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .map(Date::from)
        .ok_or(ParseError::OutOfRange(ordinal as f64))
}

/// Numbers embedded in free text.
///
/// Runs of ASCII digits and `.` are collected; runs that do not parse as a
/// float (for example `"1.2.3"` or `"."`) are dropped. Signs are not
/// recognised.
///
/// # Examples
///
/// ```
/// use interp_core::types::value::extract_numbers;
///
/// assert_eq!(extract_numbers("a 3.14 b 42"), vec![3.14, 42.0]);
/// assert!(extract_numbers("v1.2.3").is_empty());
/// ```
pub fn extract_numbers(text: &str) -> Vec<f64> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<f64>().ok())
        .collect()
}

impl From<i64> for AxisValue {
    fn from(n: i64) -> Self {
        AxisValue::Integer(n)
    }
}

impl From<i32> for AxisValue {
    fn from(n: i32) -> Self {
        AxisValue::Integer(i64::from(n))
    }
}

impl From<f64> for AxisValue {
    fn from(x: f64) -> Self {
        AxisValue::Real(x)
    }
}

impl From<&str> for AxisValue {
    fn from(s: &str) -> Self {
        AxisValue::Text(s.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(s: String) -> Self {
        AxisValue::Text(s)
    }
}

impl From<Instant> for AxisValue {
    fn from(t: Instant) -> Self {
        AxisValue::Instant(t)
    }
}

impl From<NaiveDateTime> for AxisValue {
    fn from(dt: NaiveDateTime) -> Self {
        AxisValue::Instant(Instant::from(dt))
    }
}

impl From<Date> for AxisValue {
    fn from(d: Date) -> Self {
        AxisValue::Date(d)
    }
}

impl From<NaiveDate> for AxisValue {
    fn from(d: NaiveDate) -> Self {
        AxisValue::Date(Date::from(d))
    }
}

impl From<chrono::Duration> for AxisValue {
    fn from(span: chrono::Duration) -> Self {
        AxisValue::Duration(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(h: u32, m: u32, s: u32) -> Instant {
        Instant::from_ymd_hms(2014, 1, 1, h, m, s).unwrap()
    }

    // ========================================
    // to_instant
    // ========================================

    #[test]
    fn test_numbers_are_epoch_seconds() {
        let expected = instant(0, 0, 10);
        assert_eq!(AxisValue::Integer(1_388_534_410).to_instant().unwrap(), expected);
        assert_eq!(AxisValue::Real(1_388_534_410.0).to_instant().unwrap(), expected);
    }

    #[test]
    fn test_text_timestamp_and_numeric_text() {
        let expected = instant(0, 0, 10);
        assert_eq!(AxisValue::from("2014-01-01 00:00:10").to_instant().unwrap(), expected);
        assert_eq!(AxisValue::from("1388534410").to_instant().unwrap(), expected);
    }

    #[test]
    fn test_text_unparsable_keeps_timestamp_error() {
        assert_eq!(
            AxisValue::from("noon").to_instant(),
            Err(ParseError::InvalidText("noon".to_string()))
        );
    }

    #[test]
    fn test_date_and_instant_passthrough() {
        let d = Date::from_ymd(2014, 1, 1).unwrap();
        assert_eq!(AxisValue::from(d).to_instant().unwrap(), instant(0, 0, 0));
        assert_eq!(AxisValue::from(instant(1, 2, 3)).to_instant().unwrap(), instant(1, 2, 3));
        let naive = instant(1, 2, 3).into_inner();
        assert_eq!(AxisValue::from(naive).to_instant().unwrap(), instant(1, 2, 3));
    }

    #[test]
    fn test_duration_is_not_an_instant() {
        let err = AxisValue::from(chrono::Duration::seconds(5))
            .to_instant()
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::Unsupported {
                kind: "duration",
                target: "an instant"
            }
        );
    }

    // ========================================
    // to_real
    // ========================================

    #[test]
    fn test_real_from_numbers_and_text() {
        assert_eq!(AxisValue::from(7_i32).to_real().unwrap(), 7.0);
        assert_eq!(AxisValue::from(2.5).to_real().unwrap(), 2.5);
        assert_eq!(AxisValue::from(" -3.25 ").to_real().unwrap(), -3.25);
        assert_eq!(AxisValue::from("about 3.5 kg").to_real().unwrap(), 3.5);
    }

    #[test]
    fn test_real_from_text_ambiguous() {
        assert_eq!(
            AxisValue::from("1 to 2").to_real(),
            Err(ParseError::AmbiguousNumber {
                text: "1 to 2".to_string(),
                found: 2
            })
        );
        assert!(matches!(
            AxisValue::from("none").to_real(),
            Err(ParseError::AmbiguousNumber { found: 0, .. })
        ));
    }

    #[test]
    fn test_real_from_calendar_values() {
        assert_eq!(AxisValue::from(instant(0, 0, 10)).to_real().unwrap(), 1_388_534_410.0);
        let d = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        assert_eq!(AxisValue::from(d).to_real().unwrap(), 735_234.0);
        assert_eq!(
            AxisValue::from(chrono::Duration::milliseconds(2500)).to_real().unwrap(),
            2.5
        );
    }

    // ========================================
    // to_int
    // ========================================

    #[test]
    fn test_int_rounds_to_nearest() {
        assert_eq!(AxisValue::from(42_i64).to_int().unwrap(), 42);
        assert_eq!(AxisValue::from(2.4).to_int().unwrap(), 2);
        assert_eq!(AxisValue::from(2.5).to_int().unwrap(), 3);
        assert_eq!(AxisValue::from(-2.5).to_int().unwrap(), -3);
        assert_eq!(AxisValue::from("about 3.5 kg").to_int().unwrap(), 4);
        assert_eq!(
            AxisValue::from(chrono::Duration::milliseconds(1600)).to_int().unwrap(),
            2
        );
    }

    #[test]
    fn test_int_from_calendar_values() {
        assert_eq!(AxisValue::from(instant(0, 0, 10)).to_int().unwrap(), 1_388_534_410);
        let d = Date::from_ymd(2014, 1, 1).unwrap();
        assert_eq!(AxisValue::from(d).to_int().unwrap(), 735_234);
    }

    #[test]
    fn test_int_out_of_range() {
        assert_eq!(AxisValue::from(1e300).to_int(), Err(ParseError::OutOfRange(1e300)));
        assert!(matches!(
            AxisValue::from(f64::NAN).to_int(),
            Err(ParseError::OutOfRange(_))
        ));
        assert!(matches!(
            AxisValue::from("1 to 2").to_int(),
            Err(ParseError::AmbiguousNumber { found: 2, .. })
        ));
    }

    // ========================================
    // to_date
    // ========================================

    #[test]
    fn test_date_from_ordinal() {
        let d = Date::from_ymd(2014, 1, 1).unwrap();
        assert_eq!(AxisValue::from(735_234_i64).to_date().unwrap(), d);
        assert_eq!(AxisValue::from(735_234.0).to_date().unwrap(), d);
        assert_eq!(AxisValue::from(1_i32).to_date().unwrap(), Date::from_ymd(1, 1, 1).unwrap());
        assert_eq!(AxisValue::from(d.ordinal()).to_date().unwrap(), d);
    }

    #[test]
    fn test_date_from_ordinal_out_of_range() {
        assert_eq!(
            AxisValue::from(i64::MAX).to_date(),
            Err(ParseError::OutOfRange(i64::MAX as f64))
        );
        assert!(matches!(
            AxisValue::from(i64::from(i32::MAX)).to_date(),
            Err(ParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_date_from_text_and_instant() {
        let d = Date::from_ymd(2014, 1, 1).unwrap();
        assert_eq!(AxisValue::from("2014-01-01").to_date().unwrap(), d);
        assert_eq!(AxisValue::from("2014-01-01 23:59:59").to_date().unwrap(), d);
        assert_eq!(AxisValue::from(instant(13, 30, 0)).to_date().unwrap(), d);
        assert_eq!(AxisValue::from(d).to_date().unwrap(), d);
        assert_eq!(
            AxisValue::from("noon").to_date(),
            Err(ParseError::InvalidText("noon".to_string()))
        );
    }

    #[test]
    fn test_date_unsupported_kinds() {
        assert_eq!(
            AxisValue::from(735_234.5).to_date(),
            Err(ParseError::Unsupported {
                kind: "real",
                target: "a date"
            })
        );
        assert_eq!(
            AxisValue::from(chrono::Duration::days(1)).to_date(),
            Err(ParseError::Unsupported {
                kind: "duration",
                target: "a date"
            })
        );
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(extract_numbers("x=1.5,y=2"), vec![1.5, 2.0]);
        assert_eq!(extract_numbers("... 7 ..."), vec![7.0]);
        assert!(extract_numbers("").is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(AxisValue::from("a").kind(), "text");
        assert_eq!(AxisValue::from(1_i64).kind(), "integer");
    }
}
