//! Public holiday models and the holiday calendar abstraction.
//!
//! The engine never consults a global holiday list. Callers inject a
//! [`HolidayCalendar`], usually a [`HolidayTable`] loaded from data files by
//! [`ConfigLoader`](crate::config::ConfigLoader), so that new years and
//! jurisdictions are added without touching the rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_date;
use crate::error::EngineResult;

/// Represents a single public holiday.
///
/// # Example
///
/// ```
/// use shift_entitlement::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
///     name: "Australia Day".to_string(),
///     region: "NSW".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Australia Day").
    pub name: String,
    /// The jurisdiction the holiday applies in (e.g., "NSW").
    pub region: String,
}

/// A read-only lookup answering whether a date is a public holiday.
///
/// Implementations must be cheap to query and safe to share between
/// threads; the engine only ever reads from them.
pub trait HolidayCalendar: Send + Sync {
    /// Returns `true` if `date` is a public holiday in this calendar.
    fn is_public_holiday(&self, date: NaiveDate) -> bool;

    /// Returns the holiday's name, if the calendar knows it.
    fn holiday_name(&self, _date: NaiveDate) -> Option<&str> {
        None
    }

    /// A short code identifying the calendar's jurisdiction.
    fn jurisdiction(&self) -> &str {
        "unspecified"
    }

    /// The version of the holiday data, empty if none was recorded.
    fn version(&self) -> &str {
        ""
    }
}

/// A fixed table of public holidays for one jurisdiction.
///
/// Membership is an exact date match.
///
/// # Example
///
/// ```
/// use shift_entitlement::models::{HolidayCalendar, HolidayTable};
/// use chrono::NaiveDate;
///
/// let table = HolidayTable::from_iso_dates("TEST", &["2024-01-01", "2024-12-25"]).unwrap();
///
/// assert!(table.is_public_holiday(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
/// assert!(!table.is_public_holiday(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    jurisdiction: String,
    version: String,
    holidays: BTreeMap<NaiveDate, PublicHoliday>,
}

impl HolidayTable {
    /// Creates an empty table for a jurisdiction.
    pub fn new(jurisdiction: impl Into<String>) -> Self {
        Self {
            jurisdiction: jurisdiction.into(),
            version: String::new(),
            holidays: BTreeMap::new(),
        }
    }

    /// Sets the data version this table was built from.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Builds an unnamed table from ISO date strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedDate`](crate::error::EngineError::MalformedDate)
    /// for the first entry that is not a valid `YYYY-MM-DD` date.
    pub fn from_iso_dates(jurisdiction: impl Into<String>, dates: &[&str]) -> EngineResult<Self> {
        let mut table = Self::new(jurisdiction);
        for raw in dates {
            let date = parse_date(raw)?;
            table.insert(date, "Public holiday");
        }
        Ok(table)
    }

    /// Adds a holiday. A later insert for the same date replaces the name.
    pub fn insert(&mut self, date: NaiveDate, name: impl Into<String>) {
        let holiday = PublicHoliday {
            date,
            name: name.into(),
            region: self.jurisdiction.clone(),
        };
        self.holidays.insert(date, holiday);
    }

    /// The number of holidays in the table.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns `true` if the table holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterates the holidays in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &PublicHoliday> {
        self.holidays.values()
    }
}

impl HolidayCalendar for HolidayTable {
    fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }

    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(|h| h.name.as_str())
    }

    fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_membership_is_exact_date_match() {
        let table = HolidayTable::from_iso_dates("TEST", &["2024-01-01"]).unwrap();
        assert!(table.is_public_holiday(make_date("2024-01-01")));
        assert!(!table.is_public_holiday(make_date("2025-01-01")));
        assert!(!table.is_public_holiday(make_date("2024-01-02")));
    }

    #[test]
    fn test_from_iso_dates_rejects_bad_entry() {
        let result = HolidayTable::from_iso_dates("TEST", &["2024-01-01", "not-a-date"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_holiday_name_lookup() {
        let mut table = HolidayTable::new("NSW");
        table.insert(make_date("2024-12-25"), "Christmas Day");

        assert_eq!(
            table.holiday_name(make_date("2024-12-25")),
            Some("Christmas Day")
        );
        assert_eq!(table.holiday_name(make_date("2024-12-24")), None);
    }

    #[test]
    fn test_insert_records_region_from_jurisdiction() {
        let mut table = HolidayTable::new("NSW");
        table.insert(make_date("2024-04-25"), "Anzac Day");

        let holiday = table.holidays().next().unwrap();
        assert_eq!(holiday.region, "NSW");
        assert_eq!(table.jurisdiction(), "NSW");
    }

    #[test]
    fn test_version_defaults_to_empty() {
        let table = HolidayTable::new("NSW");
        assert_eq!(table.version(), "");

        let table = table.with_version("2025-01");
        assert_eq!(table.version(), "2025-01");
    }

    #[test]
    fn test_holidays_iterate_in_date_order() {
        let mut table = HolidayTable::new("NSW");
        table.insert(make_date("2024-12-26"), "Boxing Day");
        table.insert(make_date("2024-01-01"), "New Year's Day");
        table.insert(make_date("2024-04-25"), "Anzac Day");

        let dates: Vec<NaiveDate> = table.holidays().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2024-01-01"),
                make_date("2024-04-25"),
                make_date("2024-12-26")
            ]
        );
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_table_has_no_holidays() {
        let table = HolidayTable::new("NONE");
        assert!(table.is_empty());
        assert!(!table.is_public_holiday(make_date("2024-01-01")));
    }

    #[test]
    fn test_calendar_is_usable_as_trait_object() {
        let table = HolidayTable::from_iso_dates("TEST", &["2024-01-01"]).unwrap();
        let calendar: &dyn HolidayCalendar = &table;
        assert!(calendar.is_public_holiday(make_date("2024-01-01")));
        assert_eq!(calendar.jurisdiction(), "TEST");
    }

    #[test]
    fn test_public_holiday_serialization() {
        let holiday = PublicHoliday {
            date: make_date("2024-01-26"),
            name: "Australia Day".to_string(),
            region: "NSW".to_string(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"date\":\"2024-01-26\""));
        assert!(json.contains("\"region\":\"NSW\""));
    }
}
