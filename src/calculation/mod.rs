//! Payroll calculation modules.
//!
//! Each module provides a pure calculation step: calendar resolution, leave
//! aggregation, rule evaluation, and the compositor that combines them into
//! a payroll run and payslip pair.

mod calendar;
mod compositor;
mod leave_days;
mod rules;

pub use calendar::{days_in_month, month_window, resolve_month, MonthCalendar};
pub use compositor::{compose_payroll, PayrollOutcome};
pub use leave_days::{aggregate_leave_days, LeaveDayCounts};
pub use rules::{evaluate_rules, BaseValues, RuleEvaluation};
