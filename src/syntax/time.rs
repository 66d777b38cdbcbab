//! UTC Time and Generalized Time syntaxes.
//!
//! Both grammars are validated field by field and report the exact character
//! that breaks them. Validation is not calendar-aware (day 31 is accepted in
//! every month); conversion to an instant for matching is.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use super::{SyntaxImpl, as_utf8};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

const UTC_TIME: &str = "UTC Time";
const GENERALIZED_TIME: &str = "Generalized Time";

/// Fields of a scanned time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    /// Fraction digits and their count, applying to the last present unit
    pub fraction: Option<(u64, u32)>,
    /// Zone offset east of UTC
    pub offset_seconds: i32,
}

impl TimeComponents {
    /// Convert to an instant, rejecting dates that do not exist.
    pub fn to_datetime(&self, syntax: &str, text: &str) -> ValidationResult<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| ValidationError::invalid(syntax, text, "the date does not exist"))?;
        let leap = self.second == Some(60);
        let start = date
            .and_hms_opt(
                self.hour,
                self.minute.unwrap_or(0),
                self.second.map(|s| s.min(59)).unwrap_or(0),
            )
            .ok_or_else(|| ValidationError::invalid(syntax, text, "the time does not exist"))?;

        let unit_millis: i64 = match (self.minute, self.second) {
            (None, _) => 3_600_000,
            (Some(_), None) => 60_000,
            (Some(_), Some(_)) => 1_000,
        };
        let fraction_millis = self
            .fraction
            .map(|(digits, count)| {
                let scale = 10_i64.checked_pow(count).unwrap_or(i64::MAX);
                (digits as i64).saturating_mul(unit_millis) / scale
            })
            .unwrap_or(0);
        let leap_millis = if leap { 1_000 } else { 0 };

        let offset = FixedOffset::east_opt(self.offset_seconds)
            .ok_or_else(|| ValidationError::invalid(syntax, text, "the zone offset is out of range"))?;
        let local = offset
            .from_local_datetime(&start)
            .single()
            .ok_or_else(|| ValidationError::invalid(syntax, text, "the time is ambiguous"))?;
        Ok(local.with_timezone(&Utc) + Duration::milliseconds(fraction_millis + leap_millis))
    }
}

struct TimeScanner<'a> {
    syntax: &'static str,
    text: &'a str,
    position: usize,
}

impl<'a> TimeScanner<'a> {
    fn new(syntax: &'static str, text: &'a str) -> Self {
        Self {
            syntax,
            text,
            position: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    fn illegal_here(&self) -> ValidationError {
        let c = self.text[self.position..].chars().next().unwrap_or('?');
        ValidationError::illegal_character(self.syntax, self.text, c, self.position)
    }

    fn digit(&mut self) -> ValidationResult<u32> {
        match self.peek() {
            None => Err(ValidationError::too_short(self.syntax, self.text)),
            Some(b) if b.is_ascii_digit() => {
                self.position += 1;
                Ok(u32::from(b - b'0'))
            }
            Some(_) => Err(self.illegal_here()),
        }
    }

    /// Two digits within `min..=max`, blaming the first digit that makes the value impossible.
    fn two_digits(&mut self, min: u32, max: u32, field: &str) -> ValidationResult<u32> {
        let start = self.position;
        let tens = self.digit()?;
        if tens * 10 > max || tens * 10 + 9 < min {
            return Err(ValidationError::component(
                self.syntax,
                self.text,
                start,
                format!("invalid {field}"),
            ));
        }
        let units = self.digit()?;
        let value = tens * 10 + units;
        if value < min || value > max {
            return Err(ValidationError::component(
                self.syntax,
                self.text,
                start + 1,
                format!("invalid {field}"),
            ));
        }
        Ok(value)
    }

    fn next_is_digit(&self) -> bool {
        self.peek().is_some_and(|b| b.is_ascii_digit())
    }

    /// `Z`, or a sign followed by two or four offset digits, then end of input.
    fn zone(&mut self) -> ValidationResult<i32> {
        let offset = match self.peek() {
            None => return Err(ValidationError::too_short(self.syntax, self.text)),
            Some(b'Z') => {
                self.position += 1;
                0
            }
            Some(sign @ (b'+' | b'-')) => {
                self.position += 1;
                let hours = self.two_digits(0, 23, "zone hour")?;
                let minutes = if self.peek().is_some() {
                    self.two_digits(0, 59, "zone minute")?
                } else {
                    0
                };
                let seconds = (hours * 3600 + minutes * 60) as i32;
                if sign == b'-' { -seconds } else { seconds }
            }
            Some(_) => return Err(self.illegal_here()),
        };
        if self.peek().is_some() {
            return Err(self.illegal_here());
        }
        Ok(offset)
    }
}

/// Scan an RFC 4517 UTCTime value: `YYMMDDHHMM[SS](Z|+hh[mm]|-hh[mm])`.
///
/// Two-digit years below 50 are read as 20xx.
pub fn scan_utc_time(text: &str) -> ValidationResult<TimeComponents> {
    let mut scanner = TimeScanner::new(UTC_TIME, text);
    let year = scanner.two_digits(0, 99, "year")? as i32;
    let month = scanner.two_digits(1, 12, "month")?;
    let day = scanner.two_digits(1, 31, "day")?;
    let hour = scanner.two_digits(0, 23, "hour")?;
    let minute = scanner.two_digits(0, 59, "minute")?;
    let second = if scanner.next_is_digit() {
        Some(scanner.two_digits(0, 60, "second")?)
    } else {
        None
    };
    let offset_seconds = scanner.zone()?;
    Ok(TimeComponents {
        year: if year < 50 { 2000 + year } else { 1900 + year },
        month,
        day,
        hour,
        minute: Some(minute),
        second,
        fraction: None,
        offset_seconds,
    })
}

/// Scan an RFC 4517 GeneralizedTime value:
/// `YYYYMMDDHH[MM[SS]][(.|,)fraction](Z|+hh[mm]|-hh[mm])`.
pub fn scan_generalized_time(text: &str) -> ValidationResult<TimeComponents> {
    let mut scanner = TimeScanner::new(GENERALIZED_TIME, text);
    let mut year = 0;
    for _ in 0..4 {
        year = year * 10 + scanner.digit()?;
    }
    let month = scanner.two_digits(1, 12, "month")?;
    let day = scanner.two_digits(1, 31, "day")?;
    let hour = scanner.two_digits(0, 23, "hour")?;
    let minute = if scanner.next_is_digit() {
        Some(scanner.two_digits(0, 59, "minute")?)
    } else {
        None
    };
    let second = if minute.is_some() && scanner.next_is_digit() {
        Some(scanner.two_digits(0, 60, "second")?)
    } else {
        None
    };
    let fraction = if matches!(scanner.peek(), Some(b'.' | b',')) {
        scanner.position += 1;
        let mut digits: u64 = 0;
        let mut count = 0;
        while scanner.next_is_digit() {
            let d = u64::from(scanner.digit()?);
            // Precision beyond nanoseconds is dropped
            if count < 9 {
                digits = digits * 10 + d;
                count += 1;
            }
        }
        if count == 0 {
            return Err(match scanner.peek() {
                None => ValidationError::too_short(GENERALIZED_TIME, text),
                Some(_) => scanner.illegal_here(),
            });
        }
        Some((digits, count))
    } else {
        None
    };
    let offset_seconds = scanner.zone()?;
    Ok(TimeComponents {
        year: year as i32,
        month,
        day,
        hour,
        minute,
        second,
        fraction,
        offset_seconds,
    })
}

/// Parse a GeneralizedTime value to an instant.
pub fn parse_generalized_time(text: &str) -> ValidationResult<DateTime<Utc>> {
    scan_generalized_time(text)?.to_datetime(GENERALIZED_TIME, text)
}

/// Parse a UTCTime value to an instant.
pub fn parse_utc_time(text: &str) -> ValidationResult<DateTime<Utc>> {
    scan_utc_time(text)?.to_datetime(UTC_TIME, text)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UtcTimeSyntax;

impl SyntaxImpl for UtcTimeSyntax {
    fn name(&self) -> &str {
        UTC_TIME
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_UTC_TIME)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_UTC_TIME)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        scan_utc_time(as_utf8(UTC_TIME, value)?).map(|_| ())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralizedTimeSyntax;

impl SyntaxImpl for GeneralizedTimeSyntax {
    fn name(&self) -> &str {
        GENERALIZED_TIME
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_GENERALIZED_TIME)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_GENERALIZED_TIME)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        scan_generalized_time(as_utf8(GENERALIZED_TIME, value)?).map(|_| ())
    }
}
