//! Calculation logic for the shift entitlement engine.
//!
//! This module contains the individual rules applied to a single shift:
//! day classification, span segmentation and break allocation, quarter-hour
//! rounding, ordinary hours, weekday and Saturday overtime, Sunday double
//! time, public holiday penalties, the minimum payment floor, meal
//! allowances and the explanation. Each rule returns its own audit step(s)
//! so the entry points in [`crate::engine`] can assemble the audit trace.

mod clauses;
mod day_detection;
mod explanation;
mod meal_allowance;
mod minimum_payment;
mod ordinary_hours;
mod public_holiday_penalty;
mod rounding;
mod saturday_penalty;
mod segmentation;
mod sunday_penalty;
mod time_utils;
mod weekday_overtime;

pub use clauses::{
    DAY_CLASSIFICATION_CLAUSE, MEAL_ALLOWANCE_CLAUSE, MINIMUM_PAYMENT_CLAUSE,
    ORDINARY_HOURS_CLAUSE, OVERTIME_RATES_CLAUSE, PUBLIC_HOLIDAY_CLAUSE, ROUNDING_CLAUSE,
    SATURDAY_WORK_CLAUSE, SPAN_OF_HOURS_CLAUSE, SUNDAY_WORK_CLAUSE, UNPAID_BREAK_CLAUSE,
};
pub use day_detection::{DayClassification, DayType, classify_day, get_day_type};
pub use explanation::{build_explanation, pay_categories};
pub use meal_allowance::{
    EARLY_START_BEFORE_MINUTES, LATE_FINISH_AFTER_MINUTES, MEAL_OVERTIME_THRESHOLD_MINUTES,
    MealAllowanceInput, MealAllowanceResult, NON_WEEKDAY_WORKED_THRESHOLD_MINUTES,
    WEEKDAY_MEAL_ALLOWANCE_CAP, calculate_meal_allowance,
};
pub use minimum_payment::{MINIMUM_PAYMENT_MINUTES, MinimumPaymentResult, apply_minimum_payment};
pub use ordinary_hours::{ORDINARY_DAILY_LIMIT_MINUTES, OrdinaryHoursResult, calculate_ordinary_hours};
pub use public_holiday_penalty::{PublicHolidayPayResult, calculate_public_holiday_pay};
pub use rounding::{ROUNDING_BLOCK_MINUTES, round_segments, round_up_to_quarter, rounding_step};
pub use saturday_penalty::{SaturdayPayResult, calculate_saturday_pay};
pub use segmentation::{
    BreakAllocation, DAY_END_MINUTES, SPAN_END_MINUTES, SPAN_START_MINUTES, TimeSegments,
    allocate_break,
};
pub use sunday_penalty::{SundayPayResult, calculate_sunday_pay};
pub use time_utils::{
    day_of_week, format_minutes, minutes_to_hours, overlap, parse_clock_minutes, parse_date,
    parse_time, round_hours, to_minutes, weekday_name,
};
pub use weekday_overtime::{
    OVERTIME_TIER_1_LIMIT_MINUTES, OvertimeTiers, WeekdayOvertimeResult, calculate_weekday_pay,
    tier_overtime,
};
