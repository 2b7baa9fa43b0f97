//! Configuration types for holiday calendars.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Metadata about the holiday calendar.
///
/// Identifies the jurisdiction the calendar covers and where its data came
/// from.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarMetadata {
    /// The jurisdiction code (e.g., "NSW").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The version of the holiday data.
    pub version: String,
    /// URL of the official holiday list.
    pub source_url: String,
}

/// A single holiday entry in a year file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// One `holidays/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayYearConfig {
    /// The calendar year the file covers.
    pub year: i32,
    /// The holidays observed in that year.
    pub holidays: Vec<HolidayEntry>,
}
