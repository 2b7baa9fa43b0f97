//! Configuration loading for the shift entitlement engine.
//!
//! Public holiday calendars are data, not code. This module loads a
//! jurisdiction's calendar metadata and per-year holiday lists from YAML
//! files and turns them into a [`HolidayTable`](crate::models::HolidayTable).
//!
//! # Example
//!
//! ```no_run
//! use shift_entitlement::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nsw").unwrap();
//! println!("Loaded calendar: {}", config.calendar().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarMetadata, HolidayEntry, HolidayYearConfig};
