//! Meal allowance calculation.
//!
//! Meal allowances are counted from worked time before rounding:
//!
//! - **Weekday:** one for starting before 06:00, and one for working more
//!   than two hours of overtime and finishing after 18:00. At most two.
//! - **Saturday, Sunday and public holidays:** one if more than five hours
//!   were worked, otherwise none.

use crate::models::AuditStep;

use super::clauses::MEAL_ALLOWANCE_CLAUSE;
use super::day_detection::DayType;
use super::time_utils::format_minutes;

/// A weekday start before this time (06:00) earns a meal allowance.
pub const EARLY_START_BEFORE_MINUTES: i64 = 6 * 60;

/// A weekday finish after this time (18:00) can earn a meal allowance.
pub const LATE_FINISH_AFTER_MINUTES: i64 = 18 * 60;

/// Weekday overtime must exceed this many unrounded minutes (2 hours).
pub const MEAL_OVERTIME_THRESHOLD_MINUTES: i64 = 2 * 60;

/// Weekend and holiday work must exceed this many minutes (5 hours).
pub const NON_WEEKDAY_WORKED_THRESHOLD_MINUTES: i64 = 5 * 60;

/// The most meal allowances a weekday shift can earn.
pub const WEEKDAY_MEAL_ALLOWANCE_CAP: u32 = 2;

/// The facts about a shift the meal allowance rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealAllowanceInput {
    /// The day classification.
    pub day_type: DayType,
    /// Shift start in minutes since midnight.
    pub start_minutes: i64,
    /// Shift end in minutes since midnight.
    pub end_minutes: i64,
    /// Minutes worked after the break, unrounded.
    pub worked_minutes: i64,
    /// Weekday overtime (pre + in-span excess + post), unrounded.
    pub weekday_overtime_minutes: i64,
}

/// The result of calculating meal allowances.
#[derive(Debug, Clone)]
pub struct MealAllowanceResult {
    /// Number of meal allowances payable.
    pub count: u32,
    /// Why each allowance was triggered, in rule order.
    pub reasons: Vec<String>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the meal allowances a shift earns.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_meal_allowance, DayType, MealAllowanceInput};
///
/// // Weekday 05:30 to 19:00 with 30 minutes break
/// let input = MealAllowanceInput {
///     day_type: DayType::Weekday,
///     start_minutes: 330,
///     end_minutes: 1140,
///     worked_minutes: 780,
///     weekday_overtime_minutes: 360,
/// };
/// let result = calculate_meal_allowance(&input, 1);
///
/// assert_eq!(result.count, 2);
/// assert_eq!(result.reasons.len(), 2);
/// ```
pub fn calculate_meal_allowance(input: &MealAllowanceInput, step_number: u32) -> MealAllowanceResult {
    let mut count: u32 = 0;
    let mut reasons = Vec::new();

    match input.day_type {
        DayType::Weekday => {
            if input.start_minutes < EARLY_START_BEFORE_MINUTES {
                count += 1;
                reasons.push(format!(
                    "Weekday shift started at {}, before 06:00",
                    format_minutes(input.start_minutes)
                ));
            }
            if input.weekday_overtime_minutes > MEAL_OVERTIME_THRESHOLD_MINUTES
                && input.end_minutes > LATE_FINISH_AFTER_MINUTES
            {
                count += 1;
                reasons.push(format!(
                    "Worked {} minutes of overtime (more than 2 hours) and finished at {}, after 18:00",
                    input.weekday_overtime_minutes,
                    format_minutes(input.end_minutes)
                ));
            }
            count = count.min(WEEKDAY_MEAL_ALLOWANCE_CAP);
        }
        DayType::Saturday | DayType::Sunday | DayType::PublicHoliday => {
            if input.worked_minutes > NON_WEEKDAY_WORKED_THRESHOLD_MINUTES {
                count = 1;
                reasons.push(format!(
                    "Worked {} minutes (more than 5 hours) on a {}",
                    input.worked_minutes, input.day_type
                ));
            }
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "meal_allowance".to_string(),
        rule_name: "Meal Allowance".to_string(),
        clause_ref: MEAL_ALLOWANCE_CLAUSE.to_string(),
        input: serde_json::json!({
            "day_type": input.day_type,
            "start": format_minutes(input.start_minutes),
            "end": format_minutes(input.end_minutes),
            "worked_minutes": input.worked_minutes,
            "weekday_overtime_minutes": input.weekday_overtime_minutes
        }),
        output: serde_json::json!({
            "count": count,
            "reasons": reasons
        }),
        reasoning: if reasons.is_empty() {
            "No meal allowance conditions were met".to_string()
        } else {
            reasons.join("; ")
        },
    };

    MealAllowanceResult {
        count,
        reasons,
        audit_step,
    }
}
