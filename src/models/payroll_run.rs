//! Payroll run model.
//!
//! A [`PayrollRun`] is the full computed summary for one employee and one
//! month. Its applied-rule ledger is a frozen copy of what the rule engine
//! produced at run time; it is never recomputed from live rule
//! configuration, since rules can change later.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rule::{RuleBase, RuleCategory, RuleKind};

/// Lifecycle state of a payroll run.
///
/// While a run is `Draft` or `Finalized` it blocks a second run for the same
/// (employee, month, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Created but not yet finalized.
    Draft,
    /// Normal terminal state.
    Finalized,
    /// Reverted by an administrator; no longer blocks a new run.
    Reverted,
}

impl RunStatus {
    /// Whether this run still occupies its (employee, month, year) slot.
    pub fn is_active(self) -> bool {
        matches!(self, RunStatus::Draft | RunStatus::Finalized)
    }
}

/// Rounding applied to the final net-pay figure, in whole currency units.
///
/// Only the final figure is rounded with this mode; all intermediate sums
/// stay at their 2-decimal ledger precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero to the nearest whole unit.
    #[default]
    Nearest,
    /// Round down to the previous whole unit.
    Floor,
    /// Round up to the next whole unit.
    Ceil,
}

impl RoundingMode {
    /// Applies the mode to an amount.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::RoundingMode;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amount = Decimal::from_str("1000.4").unwrap();
    /// assert_eq!(RoundingMode::Floor.apply(amount), Decimal::from(1000));
    /// assert_eq!(RoundingMode::Ceil.apply(amount), Decimal::from(1001));
    /// assert_eq!(RoundingMode::Nearest.apply(amount), Decimal::from(1000));
    /// ```
    pub fn apply(self, amount: Decimal) -> Decimal {
        use rust_decimal::RoundingStrategy;
        match self {
            RoundingMode::Nearest => {
                amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
            RoundingMode::Floor => amount.floor(),
            RoundingMode::Ceil => amount.ceil(),
        }
    }
}

/// One entry in the frozen applied-rule ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRule {
    /// The rule's display name.
    pub name: String,
    /// Earning or deduction.
    pub category: RuleCategory,
    /// Fixed or percentage.
    pub kind: RuleKind,
    /// The base the rule was computed against.
    pub base: RuleBase,
    /// The configured value (flat amount or percentage points).
    pub value: Decimal,
    /// The computed amount, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// The persisted result of running payroll for one employee and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier of the run.
    pub id: Uuid,
    /// The employee the run was computed for.
    pub employee_id: String,
    /// Month of the run (1-12).
    pub month: u32,
    /// Year of the run.
    pub year: i32,
    /// Lifecycle status.
    pub status: RunStatus,
    /// Calendar days in the month minus holidays (weekend-inclusive).
    pub working_days: u32,
    /// Working days minus unpaid leave days.
    pub present_days: u32,
    /// Paid leave days in the month (weekends and holidays excluded).
    pub paid_leave_days: u32,
    /// Unpaid leave days in the month (weekends and holidays excluded).
    pub unpaid_leave_days: u32,
    /// Holiday dates falling within the month.
    pub holiday_count: u32,
    /// Prorated gross before the rule pass.
    pub gross_before_deductions: Decimal,
    /// Sum of earning-rule amounts.
    pub total_earnings: Decimal,
    /// Sum of deduction-rule amounts.
    pub total_deductions: Decimal,
    /// Taxable income after taxable-rule adjustments.
    pub taxable_income: Decimal,
    /// Final net pay after the rounding mode was applied.
    pub net_pay: Decimal,
    /// Frozen copy of the rule engine's ledger.
    pub applied_rules: Vec<AppliedRule>,
    /// The rounding mode that was applied to `net_pay`.
    pub rounding: RoundingMode,
    /// The actor that triggered the run.
    pub run_by: String,
    /// When the run was created.
    pub created_at: DateTime<Utc>,
}
