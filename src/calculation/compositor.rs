//! Payroll composition.
//!
//! Combines the calendar resolver, leave aggregator, and rule engine into a
//! finalized [`PayrollRun`] and its [`Payslip`] snapshot. The output pair is
//! not yet persisted; the storage layer writes both atomically and enforces
//! the one-active-run-per-period invariant.

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::calculation::{aggregate_leave_days, evaluate_rules, resolve_month, BaseValues};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    EmployeeProfile, Holiday, LeaveRecord, PayRule, Payslip, PayrollRun, RoundingMode, RunStatus,
    SalaryStructure,
};

/// A computed, not-yet-persisted payroll run with its payslip snapshot.
#[derive(Debug, Clone)]
pub struct PayrollOutcome {
    /// The finalized run.
    pub run: PayrollRun,
    /// The payslip snapshot referencing the run.
    pub payslip: Payslip,
}

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes payroll for one employee and month.
///
/// Proration charges only for unpaid-leave days: paid leave and presence are
/// both fully compensated, so the prorated gross is
/// `gross_salary / working_days * (working_days - unpaid_leave_days)`,
/// rounded to 2 decimal places. A month consisting entirely of holidays has
/// zero working days and yields a zero gross.
///
/// The rule list is the caller's snapshot for this run; it is evaluated
/// exactly once and frozen into the run's ledger. The rounding mode touches
/// only the final net figure.
pub fn compose_payroll(
    employee: &EmployeeProfile,
    structure: &SalaryStructure,
    holidays: &[Holiday],
    leaves: &[LeaveRecord],
    rules: &[PayRule],
    year: i32,
    month: u32,
    rounding: RoundingMode,
    actor_id: &str,
) -> PayrollResult<PayrollOutcome> {
    if employee.id.trim().is_empty() {
        return Err(PayrollError::invalid("employee_id", "must not be empty"));
    }
    if structure.employee_id != employee.id {
        return Err(PayrollError::invalid(
            "employee_id",
            "salary structure belongs to a different employee",
        ));
    }

    let calendar = resolve_month(year, month, holidays)?;
    let leave = aggregate_leave_days(leaves, holidays, year, month)?;

    let present_days = calendar.working_days.saturating_sub(leave.unpaid);
    let gross_before_deductions = if calendar.working_days == 0 {
        Decimal::ZERO
    } else {
        round2(
            structure.gross_salary / Decimal::from(calendar.working_days)
                * Decimal::from(present_days),
        )
    };

    let bases = BaseValues::from_gross(structure.components.basic, gross_before_deductions);
    let evaluation = evaluate_rules(rules, &bases);

    let net_raw =
        gross_before_deductions + evaluation.total_earnings - evaluation.total_deductions;
    let net_pay = rounding.apply(net_raw.max(Decimal::ZERO));

    let now = Utc::now();
    let run = PayrollRun {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        month,
        year,
        status: RunStatus::Finalized,
        working_days: calendar.working_days,
        present_days,
        paid_leave_days: leave.paid,
        unpaid_leave_days: leave.unpaid,
        holiday_count: calendar.holiday_count,
        gross_before_deductions,
        total_earnings: evaluation.total_earnings,
        total_deductions: evaluation.total_deductions,
        taxable_income: evaluation.taxable_income,
        net_pay,
        applied_rules: evaluation.applied_rules,
        rounding,
        run_by: actor_id.to_string(),
        created_at: now,
    };

    let payslip = Payslip {
        id: Uuid::new_v4(),
        payroll_run_id: run.id,
        employee_id: employee.id.clone(),
        month,
        year,
        components: structure.components.clone(),
        gross_salary: structure.gross_salary,
        net_salary: structure.net_salary,
        currency: structure.currency.clone(),
        gross_before_deductions,
        total_deductions: run.total_deductions,
        net_pay,
        remark: None,
        created_at: now,
    };

    Ok(PayrollOutcome { run, payslip })
}
