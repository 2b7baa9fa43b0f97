//! Minimum payment for Sunday and public holiday work.
//!
//! An employee working on a Sunday or public holiday is paid for at least
//! four hours. Any shortfall is added to the highest-penalty bucket for the
//! day: 2.5x on a public holiday, 2.0x on a Sunday.

use crate::models::{AuditStep, PayBuckets, PayCategory};

use super::clauses::MINIMUM_PAYMENT_CLAUSE;
use super::day_detection::DayType;

/// The guaranteed minimum paid minutes (4 hours).
pub const MINIMUM_PAYMENT_MINUTES: i64 = 4 * 60;

/// The outcome of applying the minimum payment floor.
#[derive(Debug, Clone)]
pub struct MinimumPaymentResult {
    /// The buckets after any top-up.
    pub buckets: PayBuckets,
    /// Whether the floor raised the paid time.
    pub applied: bool,
    /// Minutes added to reach the floor.
    pub shortfall_minutes: i64,
    /// The audit step, present only for day types the floor covers.
    pub audit_step: Option<AuditStep>,
}

/// The bucket that absorbs any shortfall and the minutes already paid
/// towards the floor.
fn top_up(day_type: DayType, buckets: &PayBuckets) -> (PayCategory, i64) {
    match day_type {
        DayType::PublicHoliday => (
            PayCategory::PublicHoliday250,
            buckets.public_holiday_15 + buckets.public_holiday_25,
        ),
        _ => (PayCategory::Overtime200, buckets.overtime_20),
    }
}

/// Applies the four-hour minimum to Sunday and public holiday buckets.
///
/// Weekday and Saturday buckets are returned unchanged with no audit step.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{apply_minimum_payment, DayType};
/// use shift_entitlement::models::PayBuckets;
///
/// let sunday = PayBuckets { overtime_20: 180, ..PayBuckets::default() };
/// let result = apply_minimum_payment(DayType::Sunday, sunday, 1);
///
/// assert!(result.applied);
/// assert_eq!(result.buckets.overtime_20, 240);
/// assert_eq!(result.shortfall_minutes, 60);
/// ```
pub fn apply_minimum_payment(
    day_type: DayType,
    buckets: PayBuckets,
    step_number: u32,
) -> MinimumPaymentResult {
    if !day_type.has_minimum_payment() {
        return MinimumPaymentResult {
            buckets,
            applied: false,
            shortfall_minutes: 0,
            audit_step: None,
        };
    }

    let (category, paid_before) = top_up(day_type, &buckets);
    let shortfall_minutes = (MINIMUM_PAYMENT_MINUTES - paid_before).max(0);
    let applied = shortfall_minutes > 0;

    let mut topped_up = buckets;
    if applied {
        topped_up.add(category, shortfall_minutes);
    }

    let reasoning = if applied {
        format!(
            "{} paid minutes on a {} is below the {} minute minimum; {} minutes added at {}x",
            paid_before,
            day_type,
            MINIMUM_PAYMENT_MINUTES,
            shortfall_minutes,
            category.multiplier().normalize()
        )
    } else {
        format!(
            "{} paid minutes on a {} meets the {} minute minimum",
            paid_before, day_type, MINIMUM_PAYMENT_MINUTES
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_payment".to_string(),
        rule_name: "Minimum Payment".to_string(),
        clause_ref: MINIMUM_PAYMENT_CLAUSE.to_string(),
        input: serde_json::json!({
            "day_type": day_type,
            "paid_minutes": paid_before,
            "minimum_minutes": MINIMUM_PAYMENT_MINUTES
        }),
        output: serde_json::json!({
            "applied": applied,
            "shortfall_minutes": shortfall_minutes,
            "top_up_category": category
        }),
        reasoning,
    };

    MinimumPaymentResult {
        buckets: topped_up,
        applied,
        shortfall_minutes,
        audit_step: Some(audit_step),
    }
}
