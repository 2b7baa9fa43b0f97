//! Span segmentation and unpaid break allocation.
//!
//! A shift is split into three disjoint bands relative to the span of
//! ordinary hours: before 08:00, inside `[08:00, 20:00)`, and from 20:00 to
//! midnight. The unpaid break is then taken out of those bands, inside the
//! span first.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, BreakMinutes, ShiftInput};

use super::clauses::{SPAN_OF_HOURS_CLAUSE, UNPAID_BREAK_CLAUSE};
use super::time_utils::overlap;

/// Start of the span of ordinary hours (08:00), in minutes since midnight.
pub const SPAN_START_MINUTES: i64 = 8 * 60;

/// End of the span of ordinary hours (20:00), in minutes since midnight.
pub const SPAN_END_MINUTES: i64 = 20 * 60;

/// Minutes in a day.
pub const DAY_END_MINUTES: i64 = 24 * 60;

/// Minutes in each band of a shift.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::TimeSegments;
///
/// // 07:00 to 21:00
/// let segments = TimeSegments::from_window(420, 1260);
/// assert_eq!(segments, TimeSegments { pre: 60, in_span: 720, post: 60 });
/// assert_eq!(segments.total(), 840);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSegments {
    /// Minutes before 08:00.
    pub pre: i64,
    /// Minutes inside 08:00 to 20:00.
    pub in_span: i64,
    /// Minutes from 20:00.
    pub post: i64,
}

impl TimeSegments {
    /// Splits the window `[start, end)` into bands.
    pub fn from_window(start: i64, end: i64) -> Self {
        TimeSegments {
            pre: overlap(start, end, 0, SPAN_START_MINUTES),
            in_span: overlap(start, end, SPAN_START_MINUTES, SPAN_END_MINUTES),
            post: overlap(start, end, SPAN_END_MINUTES, DAY_END_MINUTES),
        }
    }

    /// Minutes outside the span.
    pub fn outside_span(&self) -> i64 {
        self.pre + self.post
    }

    /// Minutes across all bands.
    pub fn total(&self) -> i64 {
        self.pre + self.in_span + self.post
    }
}

/// The outcome of taking the unpaid break out of a shift's bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakAllocation {
    /// Minutes per band before the break was removed.
    pub gross: TimeSegments,
    /// Minutes per band after the break was removed.
    pub worked: TimeSegments,
    /// Minutes of break taken from each band.
    pub consumed: TimeSegments,
    /// Audit steps for segmentation and break allocation.
    pub audit_steps: Vec<AuditStep>,
}

impl BreakAllocation {
    /// Minutes worked after the break, before any rounding.
    pub fn worked_minutes(&self) -> i64 {
        self.worked.total()
    }

    /// Break minutes that could not be taken because the shift was too short.
    pub fn unallocated_break(&self, requested: BreakMinutes) -> i64 {
        i64::from(requested.minutes()) - self.consumed.total()
    }
}

/// Takes up to `remaining` minutes out of `band`, returning the amount taken.
fn consume(band: &mut i64, remaining: &mut i64) -> i64 {
    let taken = (*band).min(*remaining);
    *band -= taken;
    *remaining -= taken;
    taken
}

/// Segments a shift and allocates its unpaid break.
///
/// The break is consumed from the in-span band first, then the pre-span
/// band, then the post-span band, each capped at its own minutes. The total
/// consumed never exceeds the requested break or the gross duration.
///
/// # Arguments
///
/// * `shift` - The validated shift
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use shift_entitlement::calculation::{allocate_break, TimeSegments};
/// use shift_entitlement::models::{BreakMinutes, ShiftInput};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftInput::new(
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
///     NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
///     BreakMinutes::new(90),
/// ).unwrap();
///
/// let allocation = allocate_break(&shift, 1);
/// assert_eq!(allocation.worked, TimeSegments { pre: 60, in_span: 630, post: 60 });
/// ```
pub fn allocate_break(shift: &ShiftInput, step_number: u32) -> BreakAllocation {
    let gross = TimeSegments::from_window(shift.start_minutes(), shift.end_minutes());
    let requested = i64::from(shift.break_minutes().minutes());

    let mut worked = gross;
    let mut remaining = requested;
    let consumed_in_span = consume(&mut worked.in_span, &mut remaining);
    let consumed_pre = consume(&mut worked.pre, &mut remaining);
    let consumed_post = consume(&mut worked.post, &mut remaining);
    let consumed = TimeSegments {
        pre: consumed_pre,
        in_span: consumed_in_span,
        post: consumed_post,
    };

    let segmentation_step = AuditStep {
        step_number,
        rule_id: "span_segmentation".to_string(),
        rule_name: "Span Segmentation".to_string(),
        clause_ref: SPAN_OF_HOURS_CLAUSE.to_string(),
        input: serde_json::json!({
            "start_minutes": shift.start_minutes(),
            "end_minutes": shift.end_minutes()
        }),
        output: serde_json::json!({
            "pre": gross.pre,
            "in_span": gross.in_span,
            "post": gross.post
        }),
        reasoning: format!(
            "{} minutes before 08:00, {} minutes inside 08:00-20:00, {} minutes from 20:00",
            gross.pre, gross.in_span, gross.post
        ),
    };

    let reasoning = if remaining > 0 {
        format!(
            "Break of {} minutes exceeds the {} minute shift; {} minutes could not be taken",
            requested,
            gross.total(),
            remaining
        )
    } else {
        format!(
            "Break of {} minutes taken as {} inside the span, {} before 08:00, {} from 20:00",
            requested, consumed.in_span, consumed.pre, consumed.post
        )
    };

    let break_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "break_allocation".to_string(),
        rule_name: "Unpaid Break Allocation".to_string(),
        clause_ref: UNPAID_BREAK_CLAUSE.to_string(),
        input: serde_json::json!({
            "break_minutes": requested,
            "pre": gross.pre,
            "in_span": gross.in_span,
            "post": gross.post
        }),
        output: serde_json::json!({
            "consumed_in_span": consumed.in_span,
            "consumed_pre": consumed.pre,
            "consumed_post": consumed.post,
            "worked_minutes": worked.total()
        }),
        reasoning,
    };

    BreakAllocation {
        gross,
        worked,
        consumed,
        audit_steps: vec![segmentation_step, break_step],
    }
}
