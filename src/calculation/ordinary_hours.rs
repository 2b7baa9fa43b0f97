//! Ordinary hours calculation for weekday shifts.
//!
//! On a weekday, up to seven hours worked inside the span are ordinary time.
//! Ordinary minutes are not rounded; only overtime is paid in quarter hours.

use crate::models::AuditStep;

use super::clauses::ORDINARY_HOURS_CLAUSE;
use super::segmentation::TimeSegments;
use super::time_utils::{minutes_to_hours, round_hours};

/// The most ordinary minutes a weekday shift can earn (7 hours).
pub const ORDINARY_DAILY_LIMIT_MINUTES: i64 = 7 * 60;

/// The split of in-span worked time into ordinary time and excess.
#[derive(Debug, Clone)]
pub struct OrdinaryHoursResult {
    /// Ordinary minutes, unrounded.
    pub ordinary_minutes: i64,
    /// In-span minutes beyond the daily ordinary limit.
    pub excess_in_span_minutes: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits in-span worked minutes into ordinary time and excess.
///
/// Time outside the span is never ordinary and is not considered here.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_ordinary_hours, TimeSegments};
///
/// let worked = TimeSegments { pre: 0, in_span: 510, post: 0 };
/// let result = calculate_ordinary_hours(&worked, 1);
///
/// assert_eq!(result.ordinary_minutes, 420);
/// assert_eq!(result.excess_in_span_minutes, 90);
/// ```
pub fn calculate_ordinary_hours(worked: &TimeSegments, step_number: u32) -> OrdinaryHoursResult {
    let ordinary_minutes = worked.in_span.min(ORDINARY_DAILY_LIMIT_MINUTES);
    let excess_in_span_minutes = worked.in_span - ordinary_minutes;

    let reasoning = if excess_in_span_minutes > 0 {
        format!(
            "{} minutes worked inside the span; first {} minutes ({} hours) are ordinary, {} minutes are overtime",
            worked.in_span,
            ordinary_minutes,
            round_hours(minutes_to_hours(ordinary_minutes)).normalize(),
            excess_in_span_minutes
        )
    } else {
        format!(
            "{} minutes worked inside the span are all ordinary ({} hours)",
            worked.in_span,
            round_hours(minutes_to_hours(ordinary_minutes)).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "ordinary_hours".to_string(),
        rule_name: "Ordinary Hours".to_string(),
        clause_ref: ORDINARY_HOURS_CLAUSE.to_string(),
        input: serde_json::json!({
            "in_span_minutes": worked.in_span,
            "daily_limit_minutes": ORDINARY_DAILY_LIMIT_MINUTES
        }),
        output: serde_json::json!({
            "ordinary_minutes": ordinary_minutes,
            "excess_in_span_minutes": excess_in_span_minutes
        }),
        reasoning,
    };

    OrdinaryHoursResult {
        ordinary_minutes,
        excess_in_span_minutes,
        audit_step,
    }
}
