//! Shift calculation entry points.
//!
//! [`calculate_shift`] validates a raw [`ShiftRequest`] and runs the rules;
//! [`calculate`] runs the rules on an already validated [`ShiftInput`].
//! Both are pure: the holiday calendar is only read, and the same inputs
//! always produce the same [`CalculationResult`].

use tracing::{debug, info};

use crate::calculation::{
    DayType, MealAllowanceInput, allocate_break, apply_minimum_payment, build_explanation,
    calculate_meal_allowance, calculate_public_holiday_pay, calculate_saturday_pay,
    calculate_sunday_pay, calculate_weekday_pay, classify_day, format_minutes, minutes_to_hours,
    round_hours, weekday_name,
};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, HolidayCalendar,
    PayBuckets, PayHours, ShiftInput, ShiftRequest,
};

/// Warning code for break input that was not a clean whole number.
pub const BREAK_COERCED_WARNING: &str = "BREAK_COERCED";

/// Warning code for a break longer than the shift itself.
pub const BREAK_EXCEEDS_SHIFT_WARNING: &str = "BREAK_EXCEEDS_SHIFT";

/// Validates a shift request and calculates its entitlements.
///
/// # Errors
///
/// Returns an [`EngineError`](crate::error::EngineError) when the date,
/// start or end is missing or malformed, or when the end is not after the
/// start. No partial result is produced.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculate_shift;
/// use shift_entitlement::models::{BreakInput, HolidayTable, ShiftRequest};
/// use rust_decimal::Decimal;
///
/// let calendar = HolidayTable::new("TEST");
/// let request = ShiftRequest::new("2024-01-03", "08:00", "17:00", BreakInput::Minutes(30.0));
/// let result = calculate_shift(&request, &calendar).unwrap();
///
/// assert_eq!(result.hours.ordinary, Decimal::new(7, 0));
/// assert_eq!(result.hours.overtime_15, Decimal::new(15, 1));
/// assert_eq!(result.total_paid_hours, Decimal::new(85, 1));
/// ```
pub fn calculate_shift(
    request: &ShiftRequest,
    calendar: &dyn HolidayCalendar,
) -> EngineResult<CalculationResult> {
    let shift = request.validate()?;

    let mut warnings = Vec::new();
    if request.break_was_coerced() {
        warnings.push(AuditWarning {
            code: BREAK_COERCED_WARNING.to_string(),
            message: format!(
                "Break input {} is not a whole number of minutes; treated as {}",
                request.break_minutes,
                shift.break_minutes()
            ),
            severity: "medium".to_string(),
        });
    }

    Ok(run(&shift, calendar, warnings))
}

/// Calculates the entitlements of a validated shift.
///
/// # Example
///
/// ```
/// use shift_entitlement::calculate;
/// use shift_entitlement::models::{BreakMinutes, HolidayTable, ShiftInput};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let calendar = HolidayTable::from_iso_dates("TEST", &["2024-01-01"]).unwrap();
/// let shift = ShiftInput::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     BreakMinutes::new(60),
/// ).unwrap();
///
/// let result = calculate(&shift, &calendar);
/// assert_eq!(result.buckets.public_holiday_15, 660);
/// assert_eq!(result.buckets.public_holiday_25, 240);
/// assert!(!result.minimum_rule_applied);
/// ```
pub fn calculate(shift: &ShiftInput, calendar: &dyn HolidayCalendar) -> CalculationResult {
    run(shift, calendar, Vec::new())
}

/// Audit steps and running step counter for one calculation.
struct StepLog {
    steps: Vec<AuditStep>,
    next: u32,
}

impl StepLog {
    fn new() -> Self {
        Self {
            steps: Vec::new(),
            next: 1,
        }
    }

    fn push(&mut self, step: AuditStep) {
        self.steps.push(step);
        self.next += 1;
    }

    fn extend(&mut self, steps: Vec<AuditStep>) {
        for step in steps {
            self.push(step);
        }
    }
}

fn run(
    shift: &ShiftInput,
    calendar: &dyn HolidayCalendar,
    mut warnings: Vec<AuditWarning>,
) -> CalculationResult {
    let mut log = StepLog::new();

    let day = classify_day(shift.date(), calendar, log.next);
    debug!(
        date = %shift.date(),
        day_type = %day.day_type,
        calendar = calendar.jurisdiction(),
        calendar_version = calendar.version(),
        "Classified shift date"
    );
    log.push(day.audit_step.clone());

    let allocation = allocate_break(shift, log.next);
    log.extend(allocation.audit_steps.clone());

    let unallocated = allocation.unallocated_break(shift.break_minutes());
    if unallocated > 0 {
        warnings.push(AuditWarning {
            code: BREAK_EXCEEDS_SHIFT_WARNING.to_string(),
            message: format!(
                "Break of {} exceeds the {} minute shift; {} minutes ignored",
                shift.break_minutes(),
                shift.gross_minutes(),
                unallocated
            ),
            severity: "medium".to_string(),
        });
    }

    let worked = allocation.worked;
    let (buckets, weekday_overtime_minutes): (PayBuckets, i64) = match day.day_type {
        DayType::Weekday => {
            let result = calculate_weekday_pay(&worked, log.next);
            log.extend(result.audit_steps);
            (result.buckets, result.unrounded_overtime_minutes)
        }
        DayType::Saturday => {
            let result = calculate_saturday_pay(&worked, log.next);
            log.extend(result.audit_steps);
            (result.buckets, 0)
        }
        DayType::Sunday => {
            let result = calculate_sunday_pay(&worked, log.next);
            log.extend(result.audit_steps);
            (result.buckets, 0)
        }
        DayType::PublicHoliday => {
            let result = calculate_public_holiday_pay(&worked, log.next);
            log.extend(result.audit_steps);
            (result.buckets, 0)
        }
    };

    let minimum = apply_minimum_payment(day.day_type, buckets, log.next);
    if let Some(step) = minimum.audit_step {
        log.push(step);
    }
    let buckets = minimum.buckets;

    let meals = calculate_meal_allowance(
        &MealAllowanceInput {
            day_type: day.day_type,
            start_minutes: shift.start_minutes(),
            end_minutes: shift.end_minutes(),
            worked_minutes: allocation.worked_minutes(),
            weekday_overtime_minutes,
        },
        log.next,
    );
    log.push(meals.audit_step);

    let total_paid_hours = round_hours(minutes_to_hours(buckets.paid_minutes()));

    let mut result = CalculationResult {
        date: shift.date(),
        weekday: weekday_name(shift.date()).to_string(),
        day_type: day.day_type,
        is_public_holiday: day.is_public_holiday,
        is_weekend: day.is_weekend(),
        holiday_name: day.holiday_name,
        calendar: calendar.jurisdiction().to_string(),
        calendar_version: calendar.version().to_string(),
        start_time: format_minutes(shift.start_minutes()),
        end_time: format_minutes(shift.end_minutes()),
        break_minutes: shift.break_minutes().minutes(),
        worked_minutes: allocation.worked_minutes(),
        hours: PayHours::from(&buckets),
        buckets,
        total_paid_hours,
        minimum_rule_applied: minimum.applied,
        meal_allowances: meals.count,
        meal_allowance_reasons: meals.reasons,
        explanation: String::new(),
        audit_trace: AuditTrace {
            steps: log.steps,
            warnings,
        },
    };
    result.explanation = build_explanation(&result);

    info!(
        date = %result.date,
        day_type = %result.day_type,
        total_paid_hours = %result.total_paid_hours,
        minimum_rule_applied = result.minimum_rule_applied,
        meal_allowances = result.meal_allowances,
        "Shift calculation completed"
    );

    result
}
