//! Plain-language explanation of a calculated shift.
//!
//! The explanation is a fixed sequence of lines:
//!
//! 1. Classification
//! 2. Shift window and break
//! 3. Minimum payment notice, only when the floor raised the pay
//! 4. Total payable hours
//! 5. One line per bucket the day type can produce
//! 6. Meal allowance count, then one line per reason
//! 7. The clauses cited by the audit trace
//!
//! Hours are always rendered with two decimals.

use rust_decimal::Decimal;

use crate::models::{CalculationResult, PayCategory};

use super::day_detection::DayType;
use super::minimum_payment::MINIMUM_PAYMENT_MINUTES;
use super::time_utils::{minutes_to_hours, round_hours};

/// The buckets a day type can produce, in presentation order.
pub fn pay_categories(day_type: DayType) -> &'static [PayCategory] {
    match day_type {
        DayType::Weekday => &[
            PayCategory::Ordinary,
            PayCategory::Overtime150,
            PayCategory::Overtime200,
        ],
        DayType::Saturday => &[PayCategory::Overtime150, PayCategory::Overtime200],
        DayType::Sunday => &[PayCategory::Overtime200],
        DayType::PublicHoliday => &[PayCategory::PublicHoliday150, PayCategory::PublicHoliday250],
    }
}

fn hours(minutes: i64) -> Decimal {
    round_hours(minutes_to_hours(minutes))
}

/// Builds the explanation for a result whose other fields are complete.
///
/// # Example
///
/// ```
/// use shift_entitlement::{calculate_shift, models::{HolidayTable, ShiftRequest, BreakInput}};
///
/// let calendar = HolidayTable::new("TEST");
/// let request = ShiftRequest::new("2024-01-07", "09:00", "12:00", BreakInput::Minutes(0.0));
/// let result = calculate_shift(&request, &calendar).unwrap();
///
/// let lines = result.explanation_lines();
/// assert_eq!(lines[2], "Minimum payment applied: paid time raised to 4.00 hours");
/// assert_eq!(lines[3], "Total payable hours: 4.00");
/// ```
pub fn build_explanation(result: &CalculationResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    let classification = match &result.holiday_name {
        Some(name) if result.is_public_holiday => {
            format!("Classification: {}, {}", result.day_type, name)
        }
        _ => format!("Classification: {}", result.day_type),
    };
    lines.push(format!(
        "{} ({} {})",
        classification, result.weekday, result.date
    ));

    lines.push(format!(
        "Shift: {} to {} with a {} minute unpaid break ({:.2} hours worked)",
        result.start_time,
        result.end_time,
        result.break_minutes,
        hours(result.worked_minutes)
    ));

    if result.minimum_rule_applied {
        lines.push(format!(
            "Minimum payment applied: paid time raised to {:.2} hours",
            hours(MINIMUM_PAYMENT_MINUTES)
        ));
    }

    lines.push(format!("Total payable hours: {:.2}", result.total_paid_hours));

    for category in pay_categories(result.day_type) {
        lines.push(format!(
            "{}: {:.2}",
            category.label(),
            hours(result.buckets.minutes(*category))
        ));
    }

    lines.push(format!("Meal allowances: {}", result.meal_allowances));
    for reason in &result.meal_allowance_reasons {
        lines.push(format!("  - {}", reason));
    }

    lines.push(format!(
        "Clauses applied: {}",
        result.audit_trace.clauses().join("; ")
    ));

    lines.join("\n")
}
