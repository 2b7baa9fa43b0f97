//! Shift Entitlement Engine
//!
//! This crate classifies the worked time of a single rostered shift into
//! award pay buckets (ordinary hours, overtime at 1.5x and 2.0x, public
//! holiday time at 1.5x and 2.5x), applies quarter-hour rounding and the
//! four-hour minimum for Sunday and public holiday work, counts meal
//! allowances and explains the result with clause citations.
//!
//! # Example
//!
//! ```
//! use shift_entitlement::calculate_shift;
//! use shift_entitlement::models::{BreakInput, HolidayTable, ShiftRequest};
//! use rust_decimal::Decimal;
//!
//! let calendar = HolidayTable::from_iso_dates("NSW", &["2024-01-01"]).unwrap();
//! let request = ShiftRequest::new("2024-01-01", "06:00", "22:00", BreakInput::Minutes(60.0));
//!
//! let result = calculate_shift(&request, &calendar).unwrap();
//! assert_eq!(result.total_paid_hours, Decimal::new(15, 0));
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::{calculate, calculate_shift};
