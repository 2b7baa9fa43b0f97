//! Quarter-hour rounding of paid segments.
//!
//! Every raw segment is rounded up to the next 15-minute boundary on its
//! own, before segments are summed. Three separate 5-minute segments are
//! therefore paid as 45 minutes, not 15.

use crate::models::AuditStep;

use super::clauses::ROUNDING_CLAUSE;

/// The rounding block, in minutes.
pub const ROUNDING_BLOCK_MINUTES: i64 = 15;

/// Rounds minutes up to the next multiple of 15.
///
/// Zero and negative values round to zero.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::round_up_to_quarter;
///
/// assert_eq!(round_up_to_quarter(0), 0);
/// assert_eq!(round_up_to_quarter(1), 15);
/// assert_eq!(round_up_to_quarter(15), 15);
/// assert_eq!(round_up_to_quarter(16), 30);
/// assert_eq!(round_up_to_quarter(-5), 0);
/// ```
pub fn round_up_to_quarter(minutes: i64) -> i64 {
    if minutes <= 0 {
        return 0;
    }
    (minutes + ROUNDING_BLOCK_MINUTES - 1) / ROUNDING_BLOCK_MINUTES * ROUNDING_BLOCK_MINUTES
}

/// Rounds each segment independently and sums the results.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::round_segments;
///
/// assert_eq!(round_segments(&[5, 5, 5]), 45);
/// assert_eq!(round_segments(&[15]), 15);
/// ```
pub fn round_segments(segments: &[i64]) -> i64 {
    segments.iter().map(|m| round_up_to_quarter(*m)).sum()
}

/// Records how a set of raw segments was rounded.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::rounding_step;
///
/// let step = rounding_step(4, &[5, 5, 5]);
/// assert_eq!(step.output["rounded_total"], 45);
/// ```
pub fn rounding_step(step_number: u32, segments: &[i64]) -> AuditStep {
    let rounded: Vec<i64> = segments.iter().map(|m| round_up_to_quarter(*m)).collect();
    let raw_total: i64 = segments.iter().sum();
    let rounded_total: i64 = rounded.iter().sum();

    AuditStep {
        step_number,
        rule_id: "quarter_hour_rounding".to_string(),
        rule_name: "Quarter Hour Rounding".to_string(),
        clause_ref: ROUNDING_CLAUSE.to_string(),
        input: serde_json::json!({
            "raw_segments": segments,
            "block_minutes": ROUNDING_BLOCK_MINUTES
        }),
        output: serde_json::json!({
            "rounded_segments": rounded,
            "raw_total": raw_total,
            "rounded_total": rounded_total
        }),
        reasoning: format!(
            "Segments {:?} minutes each rounded up to the next {} minutes: {:?} = {} minutes",
            segments, ROUNDING_BLOCK_MINUTES, rounded, rounded_total
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_exact_quarters_are_unchanged() {
        assert_eq!(round_up_to_quarter(90), 90);
        assert_eq!(round_up_to_quarter(660), 660);
    }

    #[test]
    fn test_partial_quarter_rounds_up() {
        assert_eq!(round_up_to_quarter(91), 105);
        assert_eq!(round_up_to_quarter(104), 105);
    }

    #[test]
    fn test_separate_segments_pay_more_than_one_block() {
        let separate = round_segments(&[5, 5, 5]);
        let contiguous = round_segments(&[15]);
        assert_eq!(separate, 45);
        assert_eq!(contiguous, 15);
        assert!(separate > contiguous);
    }

    #[test]
    fn test_rounding_step_records_each_segment() {
        let step = rounding_step(2, &[60, 90, 7]);
        assert_eq!(step.step_number, 2);
        assert_eq!(step.rule_id, "quarter_hour_rounding");
        assert_eq!(step.output["rounded_segments"], serde_json::json!([60, 90, 15]));
        assert_eq!(step.output["raw_total"], 157);
        assert_eq!(step.output["rounded_total"], 165);
    }

    #[test]
    fn test_zero_segments_contribute_nothing() {
        assert_eq!(round_segments(&[0, 0, 0]), 0);
        assert_eq!(round_segments(&[]), 0);
    }

    proptest! {
        #[test]
        fn prop_rounding_is_idempotent(minutes in 0i64..100_000) {
            let once = round_up_to_quarter(minutes);
            prop_assert_eq!(round_up_to_quarter(once), once);
        }

        #[test]
        fn prop_rounding_never_decreases_and_adds_under_a_block(minutes in 0i64..100_000) {
            let rounded = round_up_to_quarter(minutes);
            prop_assert!(rounded >= minutes);
            prop_assert!(rounded - minutes < ROUNDING_BLOCK_MINUTES);
            prop_assert_eq!(rounded % ROUNDING_BLOCK_MINUTES, 0);
        }

        #[test]
        fn prop_segment_rounding_is_at_least_contiguous_rounding(
            a in 0i64..600, b in 0i64..600, c in 0i64..600
        ) {
            prop_assert!(round_segments(&[a, b, c]) >= round_up_to_quarter(a + b + c));
        }
    }
}
