//! Saturday pay calculation.
//!
//! Every minute worked on a Saturday is overtime. The bands before, inside
//! and after the span are rounded separately, then the total is tiered the
//! same way as weekday overtime.

use crate::models::{AuditStep, PayBuckets};

use super::clauses::SATURDAY_WORK_CLAUSE;
use super::rounding::{round_segments, rounding_step};
use super::segmentation::TimeSegments;
use super::weekday_overtime::{overtime_tier_step, tier_overtime};

/// The result of a Saturday calculation.
#[derive(Debug, Clone)]
pub struct SaturdayPayResult {
    /// Overtime minutes at 1.5x and 2.0x.
    pub buckets: PayBuckets,
    /// Audit steps for rounding and tiering.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates Saturday overtime for a shift's worked bands.
///
/// # Arguments
///
/// * `worked` - Worked minutes per band, after the break
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_saturday_pay, TimeSegments};
///
/// // 07:00 to 15:00, no break
/// let worked = TimeSegments { pre: 60, in_span: 420, post: 0 };
/// let result = calculate_saturday_pay(&worked, 1);
///
/// assert_eq!(result.buckets.ordinary, 0);
/// assert_eq!(result.buckets.overtime_15, 120);
/// assert_eq!(result.buckets.overtime_20, 360);
/// ```
pub fn calculate_saturday_pay(worked: &TimeSegments, step_number_start: u32) -> SaturdayPayResult {
    let segments = [worked.pre, worked.in_span, worked.post];
    let rounded_total = round_segments(&segments);
    let tiers = tier_overtime(rounded_total);

    let audit_steps = vec![
        rounding_step(step_number_start, &segments),
        overtime_tier_step(
            step_number_start + 1,
            "saturday_overtime",
            "Saturday Overtime",
            SATURDAY_WORK_CLAUSE,
            &segments,
            rounded_total,
            tiers,
        ),
    ];

    SaturdayPayResult {
        buckets: PayBuckets {
            overtime_15: tiers.overtime_15,
            overtime_20: tiers.overtime_20,
            ..PayBuckets::default()
        },
        audit_steps,
    }
}
