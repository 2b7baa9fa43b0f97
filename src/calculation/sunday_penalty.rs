//! Sunday pay calculation.
//!
//! All Sunday time is paid at double time. There are no ordinary hours and
//! no 1.5x tier; the worked minutes form a single bucket rounded once.

use crate::models::{AuditStep, PayBuckets};

use super::clauses::SUNDAY_WORK_CLAUSE;
use super::rounding::{round_up_to_quarter, rounding_step};
use super::segmentation::TimeSegments;

/// The result of a Sunday calculation, before the minimum payment floor.
#[derive(Debug, Clone)]
pub struct SundayPayResult {
    /// Double-time minutes.
    pub buckets: PayBuckets,
    /// Audit steps for rounding and the Sunday rate.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates Sunday double time for a shift's worked bands.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_sunday_pay, TimeSegments};
///
/// let worked = TimeSegments { pre: 0, in_span: 180, post: 0 };
/// let result = calculate_sunday_pay(&worked, 1);
///
/// assert_eq!(result.buckets.overtime_20, 180);
/// assert_eq!(result.buckets.overtime_15, 0);
/// ```
pub fn calculate_sunday_pay(worked: &TimeSegments, step_number_start: u32) -> SundayPayResult {
    let raw = worked.total();
    let rounded = round_up_to_quarter(raw);

    let sunday_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "sunday_double_time".to_string(),
        rule_name: "Sunday Double Time".to_string(),
        clause_ref: SUNDAY_WORK_CLAUSE.to_string(),
        input: serde_json::json!({
            "worked_minutes": raw
        }),
        output: serde_json::json!({
            "overtime_20": rounded
        }),
        reasoning: format!(
            "All {} worked minutes on a Sunday are paid at 2.0x, rounded to {} minutes",
            raw, rounded
        ),
    };

    SundayPayResult {
        buckets: PayBuckets {
            overtime_20: rounded,
            ..PayBuckets::default()
        },
        audit_steps: vec![rounding_step(step_number_start, &[raw]), sunday_step],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked(pre: i64, in_span: i64, post: i64) -> TimeSegments {
        TimeSegments { pre, in_span, post }
    }

    #[test]
    fn test_all_sunday_time_is_double() {
        let result = calculate_sunday_pay(&worked(60, 480, 60), 1);
        assert_eq!(result.buckets.overtime_20, 600);
        assert_eq!(result.buckets.overtime_15, 0);
        assert_eq!(result.buckets.ordinary, 0);
    }

    #[test]
    fn test_sunday_bands_are_rounded_as_one_bucket() {
        // 7 + 7 + 7 = 21 raw minutes rounds once to 30, not 45
        let result = calculate_sunday_pay(&worked(7, 7, 7), 1);
        assert_eq!(result.buckets.overtime_20, 30);
    }

    #[test]
    fn test_partial_quarter_rounds_up() {
        let result = calculate_sunday_pay(&worked(0, 301, 0), 1);
        assert_eq!(result.buckets.overtime_20, 315);
    }

    #[test]
    fn test_audit_steps() {
        let result = calculate_sunday_pay(&worked(0, 180, 0), 5);
        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].rule_id, "quarter_hour_rounding");
        assert_eq!(result.audit_steps[1].rule_id, "sunday_double_time");
        assert_eq!(result.audit_steps[1].step_number, 6);
        assert_eq!(result.audit_steps[1].clause_ref, SUNDAY_WORK_CLAUSE);
        assert_eq!(result.audit_steps[1].output["overtime_20"], 180);
    }
}
