//! Calculation result models for the shift entitlement engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: pay buckets in minutes, the hour view handed to presentation,
//! and the audit trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayType, minutes_to_hours, round_hours};

/// Represents the pay-rate bucket a block of paid time falls into.
///
/// # Example
///
/// ```
/// use shift_entitlement::models::PayCategory;
/// use rust_decimal::Decimal;
///
/// assert_eq!(PayCategory::PublicHoliday250.multiplier(), Decimal::new(25, 1));
/// assert_eq!(format!("{:?}", PayCategory::Ordinary), "Ordinary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Ordinary hours at the base rate.
    Ordinary,
    /// Overtime at 150%.
    Overtime150,
    /// Overtime at 200%.
    Overtime200,
    /// Public holiday work inside the span at 150%.
    PublicHoliday150,
    /// Public holiday work outside the span at 250%.
    PublicHoliday250,
}

impl PayCategory {
    /// All categories in presentation order.
    pub const ALL: [PayCategory; 5] = [
        PayCategory::Ordinary,
        PayCategory::Overtime150,
        PayCategory::Overtime200,
        PayCategory::PublicHoliday150,
        PayCategory::PublicHoliday250,
    ];

    /// The rate multiplier applied to the base rate.
    pub fn multiplier(self) -> Decimal {
        match self {
            PayCategory::Ordinary => Decimal::ONE,
            PayCategory::Overtime150 | PayCategory::PublicHoliday150 => Decimal::new(15, 1),
            PayCategory::Overtime200 => Decimal::TWO,
            PayCategory::PublicHoliday250 => Decimal::new(25, 1),
        }
    }

    /// A human-readable label for explanations.
    pub fn label(self) -> &'static str {
        match self {
            PayCategory::Ordinary => "Ordinary hours",
            PayCategory::Overtime150 => "Overtime at 1.5x",
            PayCategory::Overtime200 => "Overtime at 2.0x",
            PayCategory::PublicHoliday150 => "Public holiday at 1.5x",
            PayCategory::PublicHoliday250 => "Public holiday at 2.5x",
        }
    }
}

/// Paid minutes per pay category, after rounding.
///
/// Ordinary minutes are the only bucket that is not rounded to a quarter
/// hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBuckets {
    /// Ordinary minutes.
    pub ordinary: i64,
    /// Overtime minutes at 1.5x.
    pub overtime_15: i64,
    /// Overtime minutes at 2.0x.
    pub overtime_20: i64,
    /// Public holiday minutes at 1.5x.
    pub public_holiday_15: i64,
    /// Public holiday minutes at 2.5x.
    pub public_holiday_25: i64,
}

impl PayBuckets {
    /// Returns the minutes held in a category.
    pub fn minutes(&self, category: PayCategory) -> i64 {
        match category {
            PayCategory::Ordinary => self.ordinary,
            PayCategory::Overtime150 => self.overtime_15,
            PayCategory::Overtime200 => self.overtime_20,
            PayCategory::PublicHoliday150 => self.public_holiday_15,
            PayCategory::PublicHoliday250 => self.public_holiday_25,
        }
    }

    /// Adds minutes to a category.
    pub fn add(&mut self, category: PayCategory, minutes: i64) {
        let bucket = match category {
            PayCategory::Ordinary => &mut self.ordinary,
            PayCategory::Overtime150 => &mut self.overtime_15,
            PayCategory::Overtime200 => &mut self.overtime_20,
            PayCategory::PublicHoliday150 => &mut self.public_holiday_15,
            PayCategory::PublicHoliday250 => &mut self.public_holiday_25,
        };
        *bucket += minutes;
    }

    /// Total paid minutes across every category.
    pub fn paid_minutes(&self) -> i64 {
        PayCategory::ALL.iter().map(|c| self.minutes(*c)).sum()
    }
}

/// Paid hours per pay category, rounded to two decimal places.
///
/// This is the view presentation renders; field names are stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayHours {
    /// Ordinary hours.
    pub ordinary: Decimal,
    /// Overtime hours at 1.5x.
    pub overtime_15: Decimal,
    /// Overtime hours at 2.0x.
    pub overtime_20: Decimal,
    /// Public holiday hours at 1.5x.
    pub public_holiday_15: Decimal,
    /// Public holiday hours at 2.5x.
    pub public_holiday_25: Decimal,
}

impl From<&PayBuckets> for PayHours {
    fn from(buckets: &PayBuckets) -> Self {
        let hours = |category| round_hours(minutes_to_hours(buckets.minutes(category)));
        PayHours {
            ordinary: hours(PayCategory::Ordinary),
            overtime_15: hours(PayCategory::Overtime150),
            overtime_20: hours(PayCategory::Overtime200),
            public_holiday_15: hours(PayCategory::PublicHoliday150),
            public_holiday_25: hours(PayCategory::PublicHoliday250),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the award clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was accepted but adjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the clause references of every step, in order, without
    /// duplicates.
    pub fn clauses(&self) -> Vec<&str> {
        let mut clauses: Vec<&str> = Vec::new();
        for step in &self.steps {
            if !clauses.contains(&step.clause_ref.as_str()) {
                clauses.push(step.clause_ref.as_str());
            }
        }
        clauses
    }
}

/// The complete, immutable result of calculating one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The weekday name of the date (e.g., "Wednesday").
    pub weekday: String,
    /// How the day was classified for pay purposes.
    pub day_type: DayType,
    /// Whether the date is a public holiday.
    pub is_public_holiday: bool,
    /// Whether the date falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// The holiday's name, when the calendar knows it.
    pub holiday_name: Option<String>,
    /// The jurisdiction of the calendar that was consulted.
    pub calendar: String,
    /// The version of the holiday data that was consulted.
    pub calendar_version: String,
    /// Shift start (`HH:MM`).
    pub start_time: String,
    /// Shift end (`HH:MM`).
    pub end_time: String,
    /// The unpaid break that was requested, in minutes.
    pub break_minutes: u32,
    /// Minutes worked after the break, before rounding.
    pub worked_minutes: i64,
    /// Paid minutes per bucket.
    pub buckets: PayBuckets,
    /// Paid hours per bucket, rounded to two decimals.
    pub hours: PayHours,
    /// Total payable hours, rounded to two decimals.
    pub total_paid_hours: Decimal,
    /// Whether the minimum payment rule raised the paid time.
    pub minimum_rule_applied: bool,
    /// Number of meal allowances payable.
    pub meal_allowances: u32,
    /// Why each meal allowance was triggered, in rule order.
    pub meal_allowance_reasons: Vec<String>,
    /// Multi-line explanation citing the clauses applied.
    pub explanation: String,
    /// Every rule decision made during the calculation.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the explanation split into its lines.
    pub fn explanation_lines(&self) -> Vec<&str> {
        self.explanation.lines().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn step(rule_id: &str, clause_ref: &str) -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_id.to_string(),
            clause_ref: clause_ref.to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: String::new(),
        }
    }

    #[test]
    fn test_paid_minutes_sums_every_bucket() {
        let buckets = PayBuckets {
            ordinary: 420,
            overtime_15: 90,
            overtime_20: 0,
            public_holiday_15: 0,
            public_holiday_25: 0,
        };
        assert_eq!(buckets.paid_minutes(), 510);
    }

    #[test]
    fn test_add_targets_single_bucket() {
        let mut buckets = PayBuckets::default();
        buckets.add(PayCategory::PublicHoliday250, 60);
        buckets.add(PayCategory::PublicHoliday250, 15);

        assert_eq!(buckets.public_holiday_25, 75);
        assert_eq!(buckets.minutes(PayCategory::PublicHoliday150), 0);
    }

    #[test]
    fn test_pay_hours_from_buckets() {
        let buckets = PayBuckets {
            ordinary: 400,
            overtime_15: 90,
            overtime_20: 15,
            public_holiday_15: 0,
            public_holiday_25: 0,
        };
        let hours = PayHours::from(&buckets);

        assert_eq!(hours.ordinary, dec("6.67"));
        assert_eq!(hours.overtime_15, dec("1.5"));
        assert_eq!(hours.overtime_20, dec("0.25"));
        assert_eq!(hours.public_holiday_15, Decimal::ZERO);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(PayCategory::Ordinary.multiplier(), dec("1"));
        assert_eq!(PayCategory::Overtime150.multiplier(), dec("1.5"));
        assert_eq!(PayCategory::Overtime200.multiplier(), dec("2"));
        assert_eq!(PayCategory::PublicHoliday150.multiplier(), dec("1.5"));
        assert_eq!(PayCategory::PublicHoliday250.multiplier(), dec("2.5"));
    }

    #[test]
    fn test_pay_category_serialization() {
        let json = serde_json::to_string(&PayCategory::Ordinary).unwrap();
        assert_eq!(json, "\"ordinary\"");

        let json = serde_json::to_string(&PayCategory::Overtime150).unwrap();
        assert_eq!(json, "\"overtime150\"");

        let json = serde_json::to_string(&PayCategory::PublicHoliday250).unwrap();
        assert_eq!(json, "\"public_holiday250\"");
    }

    #[test]
    fn test_pay_hours_serialize_as_strings() {
        let hours = PayHours {
            ordinary: dec("7"),
            overtime_15: dec("1.5"),
            ..PayHours::default()
        };
        let json = serde_json::to_string(&hours).unwrap();
        assert!(json.contains("\"ordinary\":\"7\""));
        assert!(json.contains("\"overtime_15\":\"1.5\""));
    }

    #[test]
    fn test_audit_trace_clauses_deduplicates_in_order() {
        let trace = AuditTrace {
            steps: vec![
                step("a", "Clause 1"),
                step("b", "Clause 2"),
                step("c", "Clause 1"),
                step("d", "Clause 3"),
            ],
            warnings: vec![],
        };
        assert_eq!(trace.clauses(), vec!["Clause 1", "Clause 2", "Clause 3"]);
    }

    #[test]
    fn test_audit_warning_round_trips_through_json() {
        let warning = AuditWarning {
            code: "BREAK_COERCED".to_string(),
            message: "Break input was not a number".to_string(),
            severity: "low".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        let back: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
