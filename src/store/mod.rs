//! Storage abstraction for the payroll engine.
//!
//! The engine never talks to collaborator services directly; everything it
//! needs — employee identity, salary structures, approved leave, holidays,
//! rule configuration, and run/payslip persistence — goes through the
//! [`PayrollRepository`] trait. The bundled [`InMemoryStore`] backs the HTTP
//! service and the test suite.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::{
    EmployeeProfile, Holiday, LeaveRecord, PayRule, Payslip, PayrollRun, SalaryStructure,
};

/// The collaborator contract consumed by the payroll engine.
///
/// Implementations must make [`insert_run_and_payslip`] atomic: the
/// duplicate-run check and the write of both documents happen as one
/// operation, so two concurrent runs for the same (employee, month, year)
/// cannot both succeed and a failure never leaves a half-written pair.
///
/// [`insert_run_and_payslip`]: PayrollRepository::insert_run_and_payslip
pub trait PayrollRepository: Send + Sync {
    /// Looks up an employee's identity, failing with `EmployeeNotFound`.
    fn employee(&self, id: &str) -> PayrollResult<EmployeeProfile>;

    /// Looks up the active salary structure, failing with
    /// `SalaryStructureNotFound`.
    fn salary_structure(&self, employee_id: &str) -> PayrollResult<SalaryStructure>;

    /// Replaces an employee's salary structure, appending a salary-history
    /// snapshot of the previous configuration.
    fn update_salary_structure(
        &self,
        structure: SalaryStructure,
        reason: &str,
        changed_by: &str,
        effective_from: NaiveDate,
    ) -> PayrollResult<()>;

    /// All leave records for an employee overlapping `[start, end]`,
    /// regardless of status.
    fn leaves_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<Vec<LeaveRecord>>;

    /// All configured holiday records.
    fn holidays(&self) -> PayrollResult<Vec<Holiday>>;

    /// All configured earning/deduction rules; the rule engine filters to
    /// the active subset itself.
    fn pay_rules(&self) -> PayrollResult<Vec<PayRule>>;

    /// Persists a run and its payslip atomically, rejecting a duplicate
    /// active run for the same (employee, month, year) with
    /// `AlreadyProcessed`.
    fn insert_run_and_payslip(&self, run: PayrollRun, payslip: Payslip) -> PayrollResult<()>;

    /// Fetches a payroll run by id, failing with `PayrollRunNotFound`.
    fn payroll_run(&self, id: Uuid) -> PayrollResult<PayrollRun>;

    /// Fetches a payslip by id, failing with `PayslipNotFound`.
    fn payslip(&self, id: Uuid) -> PayrollResult<Payslip>;

    /// Updates a payslip's advisory remark; last write wins.
    fn set_payslip_remark(&self, id: Uuid, remark: Option<String>) -> PayrollResult<()>;
}
