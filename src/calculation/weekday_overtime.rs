//! Weekday overtime calculation.
//!
//! ## Rate Structure
//!
//! **Weekday time is split into ordinary time and overtime:**
//! - Up to 7 hours inside the span are ordinary
//! - Time before 08:00, time from 20:00 and in-span time beyond 7 hours is
//!   overtime
//!
//! **Overtime is tiered on the rounded total:**
//! - First 2 hours: 150%
//! - After 2 hours: 200%

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, PayBuckets};

use super::clauses::OVERTIME_RATES_CLAUSE;
use super::ordinary_hours::calculate_ordinary_hours;
use super::rounding::{round_segments, rounding_step};
use super::segmentation::TimeSegments;

/// Overtime minutes paid at 1.5x before the 2.0x tier starts.
pub const OVERTIME_TIER_1_LIMIT_MINUTES: i64 = 2 * 60;

/// Rounded overtime split into its two rate tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeTiers {
    /// Minutes at 1.5x.
    pub overtime_15: i64,
    /// Minutes at 2.0x.
    pub overtime_20: i64,
}

/// Splits a rounded overtime total into the 1.5x and 2.0x tiers.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::tier_overtime;
///
/// let tiers = tier_overtime(195);
/// assert_eq!(tiers.overtime_15, 120);
/// assert_eq!(tiers.overtime_20, 75);
/// ```
pub fn tier_overtime(total_rounded_minutes: i64) -> OvertimeTiers {
    OvertimeTiers {
        overtime_15: total_rounded_minutes.clamp(0, OVERTIME_TIER_1_LIMIT_MINUTES),
        overtime_20: (total_rounded_minutes - OVERTIME_TIER_1_LIMIT_MINUTES).max(0),
    }
}

/// Builds the audit step for a tiered overtime allocation.
pub(crate) fn overtime_tier_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    clause_ref: &str,
    segments: &[i64],
    rounded_total: i64,
    tiers: OvertimeTiers,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        clause_ref: clause_ref.to_string(),
        input: serde_json::json!({
            "raw_segments": segments,
            "tier_1_limit_minutes": OVERTIME_TIER_1_LIMIT_MINUTES
        }),
        output: serde_json::json!({
            "rounded_total": rounded_total,
            "overtime_15": tiers.overtime_15,
            "overtime_20": tiers.overtime_20
        }),
        reasoning: format!(
            "Rounded overtime of {} minutes: first {} minutes at 1.5x, {} minutes at 2.0x",
            rounded_total, tiers.overtime_15, tiers.overtime_20
        ),
    }
}

/// The result of weekday pay classification.
#[derive(Debug, Clone)]
pub struct WeekdayOvertimeResult {
    /// Ordinary and overtime minutes.
    pub buckets: PayBuckets,
    /// Overtime before rounding (pre + in-span excess + post).
    pub unrounded_overtime_minutes: i64,
    /// Audit steps for ordinary hours, rounding and overtime tiers.
    pub audit_steps: Vec<AuditStep>,
}

/// Classifies a weekday shift's worked time.
///
/// Ordinary time comes from [`calculate_ordinary_hours`]. The overtime
/// segments `{pre, in-span excess, post}` are each rounded up to a quarter
/// hour, summed, and tiered with [`tier_overtime`].
///
/// # Arguments
///
/// * `worked` - Worked minutes per band, after the break
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_weekday_pay, TimeSegments};
///
/// // 08:00 to 17:00 with a 30 minute break
/// let worked = TimeSegments { pre: 0, in_span: 510, post: 0 };
/// let result = calculate_weekday_pay(&worked, 1);
///
/// assert_eq!(result.buckets.ordinary, 420);
/// assert_eq!(result.buckets.overtime_15, 90);
/// assert_eq!(result.buckets.overtime_20, 0);
/// ```
pub fn calculate_weekday_pay(worked: &TimeSegments, step_number_start: u32) -> WeekdayOvertimeResult {
    let ordinary = calculate_ordinary_hours(worked, step_number_start);

    let segments = [worked.pre, ordinary.excess_in_span_minutes, worked.post];
    let unrounded_overtime_minutes: i64 = segments.iter().sum();
    let rounded_total = round_segments(&segments);
    let tiers = tier_overtime(rounded_total);

    let round_step = rounding_step(step_number_start + 1, &segments);
    let tier_step = overtime_tier_step(
        step_number_start + 2,
        "weekday_overtime",
        "Weekday Overtime",
        OVERTIME_RATES_CLAUSE,
        &segments,
        rounded_total,
        tiers,
    );

    let buckets = PayBuckets {
        ordinary: ordinary.ordinary_minutes,
        overtime_15: tiers.overtime_15,
        overtime_20: tiers.overtime_20,
        ..PayBuckets::default()
    };

    WeekdayOvertimeResult {
        buckets,
        unrounded_overtime_minutes,
        audit_steps: vec![ordinary.audit_step, round_step, tier_step],
    }
}
