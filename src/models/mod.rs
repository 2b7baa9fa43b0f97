//! Core data models for the shift entitlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod public_holiday;
mod shift;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PayBuckets, PayCategory, PayHours,
};
pub use public_holiday::{HolidayCalendar, HolidayTable, PublicHoliday};
pub use shift::{BreakInput, BreakMinutes, ShiftInput, ShiftRequest};
