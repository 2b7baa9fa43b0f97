//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading holiday
//! calendars from YAML files.

use chrono::Datelike;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayTable;

use super::types::{CalendarMetadata, HolidayYearConfig};

/// Loads and provides access to a jurisdiction's holiday calendar.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/nsw/
/// ├── calendar.yaml       # Jurisdiction metadata
/// └── holidays/
///     ├── 2024.yaml       # Holidays observed in 2024
///     └── 2025.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_entitlement::config::ConfigLoader;
/// use shift_entitlement::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/nsw").unwrap();
/// let calendar = loader.holiday_table();
///
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(calendar.is_public_holiday(new_year));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: CalendarMetadata,
    years: Vec<HolidayYearConfig>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/nsw")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `calendar.yaml` or the `holidays` directory is missing
    /// - Any file contains invalid YAML
    /// - A holiday is listed in the file for a different year
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let calendar_path = path.join("calendar.yaml");
        let metadata = Self::load_yaml::<CalendarMetadata>(&calendar_path)?;

        let holidays_dir = path.join("holidays");
        let years = Self::load_years(&holidays_dir)?;

        debug!(
            jurisdiction = %metadata.code,
            version = %metadata.version,
            years = years.len(),
            "Loaded holiday calendar"
        );

        Ok(Self { metadata, years })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            warn!(path = %path_str, error = %e, "Failed to parse configuration file");
            EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            }
        })
    }

    /// Loads every year file from the holidays directory, oldest first.
    fn load_years(holidays_dir: &Path) -> EngineResult<Vec<HolidayYearConfig>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut years = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let year = Self::load_yaml::<HolidayYearConfig>(&path)?;
                Self::check_year(&year, &path)?;
                years.push(year);
            }
        }

        if years.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        years.sort_by_key(|y| y.year);
        Ok(years)
    }

    /// Rejects a year file that lists a date from another year.
    fn check_year(year: &HolidayYearConfig, path: &Path) -> EngineResult<()> {
        match year.holidays.iter().find(|h| h.date.year() != year.year) {
            Some(stray) => Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "holiday '{}' on {} is listed under year {}",
                    stray.name, stray.date, year.year
                ),
            }),
            None => Ok(()),
        }
    }

    /// Returns the calendar metadata.
    pub fn calendar(&self) -> &CalendarMetadata {
        &self.metadata
    }

    /// Returns the loaded years, oldest first.
    pub fn years(&self) -> &[HolidayYearConfig] {
        &self.years
    }

    /// Builds the holiday table the engine consults.
    pub fn holiday_table(&self) -> HolidayTable {
        let mut table =
            HolidayTable::new(self.metadata.code.clone()).with_version(self.metadata.version.clone());
        for year in &self.years {
            for holiday in &year.holidays {
                table.insert(holiday.date, holiday.name.clone());
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HolidayCalendar;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/nsw"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// Writes a throwaway config directory under the system temp dir.
    fn scratch_config(name: &str, calendar: &str, years: &[(&str, &str)]) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join("shift-entitlement-tests")
            .join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("holidays")).unwrap();
        fs::write(dir.join("calendar.yaml"), calendar).unwrap();
        for (file, body) in years {
            fs::write(dir.join("holidays").join(file), body).unwrap();
        }
        dir
    }

    const CALENDAR: &str = "code: TST\nname: Test\nversion: \"1\"\nsource_url: https://example.org\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.calendar().code, "NSW");
        assert_eq!(loader.calendar().name, "New South Wales");
    }

    #[test]
    fn test_years_are_sorted() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let years: Vec<i32> = loader.years().iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2024, 2025]);
    }

    #[test]
    fn test_holiday_table_contains_named_holidays() {
        let table = ConfigLoader::load(config_path()).unwrap().holiday_table();

        assert_eq!(table.jurisdiction(), "NSW");
        assert_eq!(table.version(), "2025-01");
        assert!(table.is_public_holiday(make_date("2024-01-01")));
        assert_eq!(table.holiday_name(make_date("2024-01-26")), Some("Australia Day"));
        assert!(table.is_public_holiday(make_date("2025-12-26")));
        assert!(!table.is_public_holiday(make_date("2024-01-03")));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calendar.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_holiday_under_wrong_year_is_rejected() {
        let dir = scratch_config(
            "wrong-year",
            CALENDAR,
            &[(
                "2024.yaml",
                "year: 2024\nholidays:\n  - date: 2025-01-01\n    name: New Year's Day\n",
            )],
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("listed under year 2024"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = scratch_config(
            "bad-yaml",
            CALENDAR,
            &[("2024.yaml", "year: [not a number\n")],
        );

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_empty_holidays_directory_is_rejected() {
        let dir = scratch_config("no-years", CALENDAR, &[]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("no holiday files found"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
