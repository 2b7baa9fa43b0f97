//! Time and date helpers shared by the rules.
//!
//! All rules work in whole minutes since midnight on the shift's own date.
//! Hours only appear at the edge, as [`Decimal`] values for presentation.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::segmentation::DAY_END_MINUTES;

/// Minutes in an hour, as a [`Decimal`].
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2024-01-01").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert!(parse_date("2024-02-30").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::MalformedDate {
        value: value.to_string(),
    })
}

/// Parses an `HH:MM` time of day.
///
/// Anything that is not a valid 24-hour clock time is rejected rather than
/// being allowed to flow into arithmetic. `24:00` is not a time of day and is
/// rejected here; shift end times go through [`parse_clock_minutes`], which
/// accepts it.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{parse_time, to_minutes};
///
/// let time = parse_time("start_time", "07:30").unwrap();
/// assert_eq!(to_minutes(time), 450);
/// assert!(parse_time("start_time", "25:00").is_err());
/// assert!(parse_time("start_time", "noon").is_err());
/// ```
pub fn parse_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| EngineError::MalformedTime {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses an `HH:MM` clock reading into minutes since midnight.
///
/// Accepts every time [`parse_time`] does, plus `24:00` for the end of the
/// day (minute 1440).
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("end_time", "17:30").unwrap(), 1050);
/// assert_eq!(parse_clock_minutes("end_time", "24:00").unwrap(), 1440);
/// assert!(parse_clock_minutes("end_time", "24:01").is_err());
/// ```
pub fn parse_clock_minutes(field: &str, value: &str) -> EngineResult<i64> {
    if value.trim() == "24:00" {
        return Ok(DAY_END_MINUTES);
    }
    parse_time(field, value).map(to_minutes)
}

/// Converts a time of day to minutes since midnight.
pub fn to_minutes(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Formats minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Length of the intersection of `[s1, e1)` and `[s2, e2)`, never negative.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::overlap;
///
/// assert_eq!(overlap(420, 1260, 480, 1200), 720);
/// assert_eq!(overlap(420, 470, 480, 1200), 0);
/// ```
pub fn overlap(s1: i64, e1: i64, s2: i64, e2: i64) -> i64 {
    (e1.min(e2) - s1.max(s2)).max(0)
}

/// The weekday of a calendar date.
pub fn day_of_week(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// The English name of a date's weekday (e.g., "Monday").
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match day_of_week(date) {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Converts minutes to hours without rounding.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / MINUTES_PER_HOUR
}

/// Rounds hours to two decimal places for display.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp(2)
}
