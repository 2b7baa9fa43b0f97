//! Day detection logic.
//!
//! This module determines the pay classification of a shift's date. A public
//! holiday always takes precedence over the weekday, so a holiday falling on
//! a Tuesday is a [`DayType::PublicHoliday`], never a [`DayType::Weekday`].

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, HolidayCalendar};

use super::clauses::DAY_CLASSIFICATION_CLAUSE;
use super::time_utils::{day_of_week, weekday_name};

/// Represents the type of day for penalty rate calculation.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::DayType;
///
/// let day_type = DayType::PublicHoliday;
/// assert_eq!(format!("{}", day_type), "Public Holiday");
/// assert!(day_type.has_minimum_payment());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a public holiday.
    Weekday,
    /// Saturday, not a public holiday. All time is overtime.
    Saturday,
    /// Sunday, not a public holiday. All time is paid at 2.0x.
    Sunday,
    /// Any date in the holiday calendar.
    PublicHoliday,
}

impl DayType {
    /// Whether the four-hour minimum payment applies to this day type.
    pub fn has_minimum_payment(self) -> bool {
        match self {
            DayType::Sunday | DayType::PublicHoliday => true,
            DayType::Weekday | DayType::Saturday => false,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::PublicHoliday => write!(f, "Public Holiday"),
        }
    }
}

/// The classification of a date together with the facts it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClassification {
    /// The pay classification.
    pub day_type: DayType,
    /// The calendar weekday of the date.
    pub weekday: Weekday,
    /// Whether the calendar lists the date as a public holiday.
    pub is_public_holiday: bool,
    /// The holiday's name, if known.
    pub holiday_name: Option<String>,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

impl DayClassification {
    /// Whether the date is a Saturday or Sunday, regardless of holidays.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

/// Determines the day type for a date, ignoring holidays.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()), DayType::Saturday);
/// // 2024-01-03 is a Wednesday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match day_of_week(date) {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Classifies a date, consulting the holiday calendar first.
///
/// # Arguments
///
/// * `date` - The shift date
/// * `calendar` - The holiday calendar for the shift's jurisdiction
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{classify_day, DayType};
/// use shift_entitlement::models::HolidayTable;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayTable::from_iso_dates("TEST", &["2024-01-02"]).unwrap();
///
/// // 2024-01-02 is a Tuesday, but a holiday in this calendar
/// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(classify_day(tuesday, &calendar, 1).day_type, DayType::PublicHoliday);
/// ```
pub fn classify_day(
    date: NaiveDate,
    calendar: &dyn HolidayCalendar,
    step_number: u32,
) -> DayClassification {
    let weekday = day_of_week(date);
    let is_public_holiday = calendar.is_public_holiday(date);
    let holiday_name = calendar.holiday_name(date).map(str::to_string);

    let day_type = if is_public_holiday {
        DayType::PublicHoliday
    } else {
        get_day_type(date)
    };

    let reasoning = match (&holiday_name, is_public_holiday) {
        (Some(name), true) => format!(
            "{} {} is a public holiday ({}) in calendar {}",
            weekday_name(date),
            date,
            name,
            calendar.jurisdiction()
        ),
        (None, true) => format!(
            "{} {} is a public holiday in calendar {}",
            weekday_name(date),
            date,
            calendar.jurisdiction()
        ),
        (_, false) => format!(
            "{} {} is not a public holiday; classified as {}",
            weekday_name(date),
            date,
            day_type
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_classification".to_string(),
        rule_name: "Day Classification".to_string(),
        clause_ref: DAY_CLASSIFICATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "weekday": weekday_name(date),
            "calendar": calendar.jurisdiction()
        }),
        output: serde_json::json!({
            "day_type": day_type,
            "is_public_holiday": is_public_holiday,
            "holiday_name": holiday_name
        }),
        reasoning,
    };

    DayClassification {
        day_type,
        weekday,
        is_public_holiday,
        holiday_name,
        audit_step,
    }
}
