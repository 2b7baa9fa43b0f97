//! Public holiday pay calculation.
//!
//! On a public holiday, time inside the span is paid at 1.5x and time
//! outside it at 2.5x. The two buckets are rounded independently. There are
//! no ordinary hours.

use crate::models::{AuditStep, PayBuckets};

use super::clauses::PUBLIC_HOLIDAY_CLAUSE;
use super::rounding::{round_up_to_quarter, rounding_step};
use super::segmentation::TimeSegments;

/// The result of a public holiday calculation, before the minimum floor.
#[derive(Debug, Clone)]
pub struct PublicHolidayPayResult {
    /// Public holiday minutes at 1.5x and 2.5x.
    pub buckets: PayBuckets,
    /// Audit steps for rounding and the holiday rates.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates public holiday penalties for a shift's worked bands.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{calculate_public_holiday_pay, TimeSegments};
///
/// // 06:00 to 22:00 with a 60 minute break
/// let worked = TimeSegments { pre: 120, in_span: 660, post: 120 };
/// let result = calculate_public_holiday_pay(&worked, 1);
///
/// assert_eq!(result.buckets.public_holiday_15, 660);
/// assert_eq!(result.buckets.public_holiday_25, 240);
/// ```
pub fn calculate_public_holiday_pay(
    worked: &TimeSegments,
    step_number_start: u32,
) -> PublicHolidayPayResult {
    let in_span_raw = worked.in_span;
    let outside_raw = worked.outside_span();
    let public_holiday_15 = round_up_to_quarter(in_span_raw);
    let public_holiday_25 = round_up_to_quarter(outside_raw);

    let holiday_step = AuditStep {
        step_number: step_number_start + 1,
        rule_id: "public_holiday_penalty".to_string(),
        rule_name: "Public Holiday Penalty".to_string(),
        clause_ref: PUBLIC_HOLIDAY_CLAUSE.to_string(),
        input: serde_json::json!({
            "in_span_minutes": in_span_raw,
            "outside_span_minutes": outside_raw
        }),
        output: serde_json::json!({
            "public_holiday_15": public_holiday_15,
            "public_holiday_25": public_holiday_25
        }),
        reasoning: format!(
            "{} minutes inside 08:00-20:00 paid at 1.5x ({} rounded); {} minutes outside the span paid at 2.5x ({} rounded)",
            in_span_raw, public_holiday_15, outside_raw, public_holiday_25
        ),
    };

    PublicHolidayPayResult {
        buckets: PayBuckets {
            public_holiday_15,
            public_holiday_25,
            ..PayBuckets::default()
        },
        audit_steps: vec![
            rounding_step(step_number_start, &[in_span_raw, outside_raw]),
            holiday_step,
        ],
    }
}
