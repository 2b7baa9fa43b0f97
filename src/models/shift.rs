//! Shift model and related types.
//!
//! This module defines the raw [`ShiftRequest`] accepted at the boundary of
//! the engine, the validated [`ShiftInput`] the rules operate on, and the
//! [`BreakMinutes`] duration type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{
    DAY_END_MINUTES, format_minutes, parse_clock_minutes, parse_date, to_minutes,
};
use crate::error::{EngineError, EngineResult};

/// An unpaid break duration in whole minutes.
///
/// The value is non-negative by construction. Use [`BreakMinutes::parse`]
/// for strict parsing or [`BreakMinutes::coerce`] for the lenient request
/// boundary behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakMinutes(u32);

impl BreakMinutes {
    /// A zero-length break.
    pub const ZERO: BreakMinutes = BreakMinutes(0);

    /// Creates a break of the given number of minutes.
    pub fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Returns the break length in minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Parses a break duration strictly.
    ///
    /// Blank input is treated as no break. Anything else must be a
    /// non-negative whole number of minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_entitlement::models::BreakMinutes;
    ///
    /// assert_eq!(BreakMinutes::parse("30").unwrap().minutes(), 30);
    /// assert_eq!(BreakMinutes::parse("  ").unwrap().minutes(), 0);
    /// assert!(BreakMinutes::parse("thirty").is_err());
    /// assert!(BreakMinutes::parse("-5").is_err());
    /// ```
    pub fn parse(value: &str) -> EngineResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| EngineError::InvalidBreak {
                value: value.to_string(),
                message: "must be a non-negative whole number of minutes".to_string(),
            })
    }

    /// Coerces loosely-typed break input into a duration.
    ///
    /// Non-numeric text, `null` and other JSON values become 0 and negative
    /// numbers clamp to 0. Fractional minutes are truncated toward zero, so
    /// `45.7` is taken as a 45 minute break; breaks are whole minutes
    /// throughout the engine. The returned flag is `true` when the resulting
    /// minutes differ from what was supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_entitlement::models::{BreakInput, BreakMinutes};
    ///
    /// let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Text("45".to_string()));
    /// assert_eq!(minutes.minutes(), 45);
    /// assert!(!coerced);
    ///
    /// let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Text("lunch".to_string()));
    /// assert_eq!(minutes.minutes(), 0);
    /// assert!(coerced);
    /// ```
    pub fn coerce(input: &BreakInput) -> (Self, bool) {
        let numeric = match input {
            BreakInput::Minutes(value) => Some(*value),
            BreakInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            BreakInput::Other(_) => None,
        };

        match numeric {
            Some(value) if value.is_finite() => {
                let clamped = value.max(0.0).min(f64::from(u32::MAX)).trunc();
                (Self(clamped as u32), clamped != value)
            }
            _ => (Self::ZERO, true),
        }
    }
}

impl std::fmt::Display for BreakMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} minutes", self.0)
    }
}

/// Break input as it arrives from a form or JSON body.
///
/// Anything other than a number or a string lands in [`BreakInput::Other`]
/// so that it is coerced rather than rejected during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakInput {
    /// A numeric break length in minutes.
    Minutes(f64),
    /// A textual break length, expected to hold a number.
    Text(String),
    /// Any other JSON value (`null`, a boolean, an array or an object).
    Other(serde_json::Value),
}

impl Default for BreakInput {
    fn default() -> Self {
        BreakInput::Minutes(0.0)
    }
}

impl std::fmt::Display for BreakInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakInput::Minutes(value) => write!(f, "{}", value),
            BreakInput::Text(text) => write!(f, "\"{}\"", text),
            BreakInput::Other(value) => write!(f, "{}", value),
        }
    }
}

/// A shift as supplied by the caller, before validation.
///
/// All fields are plain strings so that missing or malformed values can be
/// reported as [`EngineError`]s rather than deserialization failures.
///
/// # Example
///
/// ```
/// use shift_entitlement::models::ShiftRequest;
///
/// let request: ShiftRequest = serde_json::from_str(r#"{
///     "date": "2024-01-03",
///     "start_time": "08:00",
///     "end_time": "17:00",
///     "break_minutes": "30"
/// }"#).unwrap();
///
/// let input = request.validate().unwrap();
/// assert_eq!(input.break_minutes().minutes(), 30);
/// assert_eq!(input.gross_minutes(), 540);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// The calendar date of the shift (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    /// The start time (`HH:MM`).
    #[serde(default)]
    pub start_time: String,
    /// The end time (`HH:MM`), on the same day as the start.
    #[serde(default)]
    pub end_time: String,
    /// The unpaid break length in minutes.
    #[serde(default)]
    pub break_minutes: BreakInput,
}

impl ShiftRequest {
    /// Creates a request from its raw parts.
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        break_minutes: BreakInput,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            break_minutes,
        }
    }

    /// Validates the request and converts it into a [`ShiftInput`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingInput`] if date, start or end is blank
    /// - [`EngineError::MalformedDate`] / [`EngineError::MalformedTime`] if
    ///   a value cannot be parsed
    /// - [`EngineError::InvalidShiftWindow`] if the end is not after the start
    pub fn validate(&self) -> EngineResult<ShiftInput> {
        let date = required("date", &self.date)?;
        let start = required("start_time", &self.start_time)?;
        let end = required("end_time", &self.end_time)?;

        let date = parse_date(date)?;
        let start = parse_clock_minutes("start_time", start)?;
        let end = parse_clock_minutes("end_time", end)?;

        let (break_minutes, coerced) = BreakMinutes::coerce(&self.break_minutes);
        if coerced {
            warn!(
                input = ?self.break_minutes,
                coerced_to = break_minutes.minutes(),
                "Break input coerced"
            );
        }

        ShiftInput::from_minutes(date, start, end, break_minutes)
    }

    /// Returns `true` when the break input had to be coerced.
    pub fn break_was_coerced(&self) -> bool {
        BreakMinutes::coerce(&self.break_minutes).1
    }
}

fn required<'a>(field: &str, value: &'a str) -> EngineResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingInput {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

/// A validated single-day shift.
///
/// Times are held as minutes since midnight, so an end of `24:00` (minute
/// 1440) is representable. The end is always strictly after the start;
/// shifts crossing midnight cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShiftInput {
    date: NaiveDate,
    start_minutes: i64,
    end_minutes: i64,
    break_minutes: BreakMinutes,
}

impl ShiftInput {
    /// Creates a shift, checking that it ends after it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_entitlement::models::{BreakMinutes, ShiftInput};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    ///
    /// assert!(ShiftInput::new(date, nine, five, BreakMinutes::ZERO).is_ok());
    /// assert!(ShiftInput::new(date, five, nine, BreakMinutes::ZERO).is_err());
    /// ```
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_minutes: BreakMinutes,
    ) -> EngineResult<Self> {
        Self::from_minutes(
            date,
            to_minutes(start_time),
            to_minutes(end_time),
            break_minutes,
        )
    }

    /// Creates a shift from minutes since midnight.
    ///
    /// The end may be 1440 (`24:00`) for a shift that runs to the end of the
    /// day.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftWindow`] unless
    /// `0 <= start < end <= 1440`.
    pub fn from_minutes(
        date: NaiveDate,
        start_minutes: i64,
        end_minutes: i64,
        break_minutes: BreakMinutes,
    ) -> EngineResult<Self> {
        if start_minutes < 0 || end_minutes > DAY_END_MINUTES || end_minutes <= start_minutes {
            return Err(EngineError::InvalidShiftWindow {
                start: format_minutes(start_minutes),
                end: format_minutes(end_minutes),
            });
        }

        Ok(Self {
            date,
            start_minutes,
            end_minutes,
            break_minutes,
        })
    }

    /// The calendar date of the shift.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The requested unpaid break.
    pub fn break_minutes(&self) -> BreakMinutes {
        self.break_minutes
    }

    /// Start time in minutes since midnight.
    pub fn start_minutes(&self) -> i64 {
        self.start_minutes
    }

    /// End time in minutes since midnight, up to 1440.
    pub fn end_minutes(&self) -> i64 {
        self.end_minutes
    }

    /// Elapsed minutes from start to end, before any break.
    pub fn gross_minutes(&self) -> i64 {
        self.end_minutes() - self.start_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(date: &str, start: &str, end: &str, break_input: BreakInput) -> ShiftRequest {
        ShiftRequest::new(date, start, end, break_input)
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        let input = request("2024-01-03", "08:00", "17:00", BreakInput::Minutes(30.0))
            .validate()
            .unwrap();

        assert_eq!(input.date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(input.start_minutes(), 480);
        assert_eq!(input.end_minutes(), 1020);
        assert_eq!(input.break_minutes(), BreakMinutes::new(30));
        assert_eq!(input.gross_minutes(), 540);
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let err = request("", "08:00", "17:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingInput {
                field: "date".to_string()
            }
        );
    }

    #[test]
    fn test_blank_start_is_rejected() {
        let err = request("2024-01-03", "   ", "17:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingInput {
                field: "start_time".to_string()
            }
        );
    }

    #[test]
    fn test_missing_end_is_rejected() {
        let err = request("2024-01-03", "08:00", "", BreakInput::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::MissingInput {
                field: "end_time".to_string()
            }
        );
    }

    #[test]
    fn test_end_equal_to_start_is_rejected() {
        let err = request("2024-01-03", "09:00", "09:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidShiftWindow { .. }));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = request("2024-01-03", "22:00", "06:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidShiftWindow {
                start: "22:00".to_string(),
                end: "06:00".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_time_is_rejected_up_front() {
        let err = request("2024-01-03", "8am", "17:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::MalformedTime { ref field, .. } if field == "start_time"));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let err = request("03/01/2024", "08:00", "17:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::MalformedDate { .. }));
    }

    #[test]
    fn test_end_of_day_is_accepted_as_end_time() {
        let input = request("2024-01-03", "20:00", "24:00", BreakInput::default())
            .validate()
            .unwrap();
        assert_eq!(input.start_minutes(), 1200);
        assert_eq!(input.end_minutes(), 1440);
        assert_eq!(input.gross_minutes(), 240);
    }

    #[test]
    fn test_end_of_day_as_start_time_is_an_empty_window() {
        let err = request("2024-01-03", "24:00", "24:00", BreakInput::default())
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidShiftWindow {
                start: "24:00".to_string(),
                end: "24:00".to_string(),
            }
        );
    }

    #[test]
    fn test_from_minutes_rejects_times_outside_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert!(ShiftInput::from_minutes(date, -30, 60, BreakMinutes::ZERO).is_err());
        assert!(ShiftInput::from_minutes(date, 1200, 1500, BreakMinutes::ZERO).is_err());
        assert!(ShiftInput::from_minutes(date, 1200, 1440, BreakMinutes::ZERO).is_ok());
    }

    #[test]
    fn test_non_numeric_break_defaults_to_zero() {
        let req = request("2024-01-03", "08:00", "17:00", BreakInput::Text("lunch".to_string()));
        let input = req.validate().unwrap();
        assert_eq!(input.break_minutes(), BreakMinutes::ZERO);
        assert!(req.break_was_coerced());
    }

    #[test]
    fn test_negative_break_clamps_to_zero() {
        let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Minutes(-15.0));
        assert_eq!(minutes, BreakMinutes::ZERO);
        assert!(coerced);
    }

    #[test]
    fn test_fractional_break_truncates() {
        let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Text("30.5".to_string()));
        assert_eq!(minutes.minutes(), 30);
        assert!(coerced);
    }

    #[test]
    fn test_blank_break_text_is_zero_without_coercion() {
        let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Text(String::new()));
        assert_eq!(minutes, BreakMinutes::ZERO);
        assert!(!coerced);
    }

    #[test]
    fn test_nan_break_is_coerced() {
        let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Minutes(f64::NAN));
        assert_eq!(minutes, BreakMinutes::ZERO);
        assert!(coerced);
    }

    #[test]
    fn test_strict_parse_rejects_fraction() {
        assert!(BreakMinutes::parse("7.5").is_err());
    }

    #[test]
    fn test_request_deserializes_numeric_break() {
        let req: ShiftRequest = serde_json::from_str(
            r#"{"date":"2024-01-07","start_time":"09:00","end_time":"12:00","break_minutes":15}"#,
        )
        .unwrap();
        assert_eq!(req.break_minutes, BreakInput::Minutes(15.0));
    }

    #[test]
    fn test_request_deserializes_without_break() {
        let req: ShiftRequest = serde_json::from_str(
            r#"{"date":"2024-01-07","start_time":"09:00","end_time":"12:00"}"#,
        )
        .unwrap();
        assert_eq!(req.break_minutes, BreakInput::Minutes(0.0));
    }

    #[test]
    fn test_request_with_missing_fields_deserializes_then_fails_validation() {
        let req: ShiftRequest = serde_json::from_str(r#"{"date":"2024-01-07"}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(EngineError::MissingInput { ref field }) if field == "start_time"
        ));
    }

    #[test]
    fn test_fractional_numeric_break_truncates_toward_zero() {
        let (minutes, coerced) = BreakMinutes::coerce(&BreakInput::Minutes(45.7));
        assert_eq!(minutes.minutes(), 45);
        assert!(coerced);
    }

    #[test]
    fn test_request_deserializes_null_break() {
        let req: ShiftRequest = serde_json::from_str(
            r#"{"date":"2024-01-03","start_time":"08:00","end_time":"17:00","break_minutes":null}"#,
        )
        .unwrap();
        assert_eq!(req.break_minutes, BreakInput::Other(serde_json::Value::Null));

        let input = req.validate().unwrap();
        assert_eq!(input.break_minutes(), BreakMinutes::ZERO);
        assert!(req.break_was_coerced());
    }

    #[test]
    fn test_non_scalar_breaks_coerce_to_zero() {
        for value in [
            serde_json::json!(true),
            serde_json::json!(false),
            serde_json::json!([30]),
            serde_json::json!({"minutes": 30}),
        ] {
            let input: BreakInput = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(input, BreakInput::Other(value));

            let (minutes, coerced) = BreakMinutes::coerce(&input);
            assert_eq!(minutes, BreakMinutes::ZERO);
            assert!(coerced);
        }
    }

    #[test]
    fn test_break_minutes_display() {
        assert_eq!(BreakMinutes::new(30).to_string(), "30 minutes");
    }
}
