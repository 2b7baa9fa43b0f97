//! Award clause references cited in audit steps and explanations.

/// Classification of the day as weekday, weekend or public holiday.
pub const DAY_CLASSIFICATION_CLAUSE: &str = "Clause 21.1 (days of work)";

/// Span of ordinary hours, 08:00 to 20:00.
pub const SPAN_OF_HOURS_CLAUSE: &str = "Clause 21.2 (span of ordinary hours)";

/// Unpaid meal breaks.
pub const UNPAID_BREAK_CLAUSE: &str = "Clause 21.5 (unpaid meal breaks)";

/// Seven ordinary hours per day on weekdays.
pub const ORDINARY_HOURS_CLAUSE: &str = "Clause 21.3 (ordinary hours per day)";

/// Overtime rates: 1.5x for the first two hours, 2.0x thereafter.
pub const OVERTIME_RATES_CLAUSE: &str = "Clause 25.1 (overtime rates)";

/// All Saturday work is overtime.
pub const SATURDAY_WORK_CLAUSE: &str = "Clause 25.2 (Saturday work)";

/// All Sunday work is paid at double time.
pub const SUNDAY_WORK_CLAUSE: &str = "Clause 25.3 (Sunday work)";

/// Public holiday penalties.
pub const PUBLIC_HOLIDAY_CLAUSE: &str = "Clause 27.2 (public holiday work)";

/// Overtime is paid in 15-minute increments.
pub const ROUNDING_CLAUSE: &str = "Clause 25.6 (overtime rounding)";

/// Minimum four hours' payment for Sunday and public holiday work.
pub const MINIMUM_PAYMENT_CLAUSE: &str = "Clause 25.5 (minimum payment)";

/// Meal allowances for early starts and extended overtime.
pub const MEAL_ALLOWANCE_CLAUSE: &str = "Clause 17.3 (meal allowance)";
