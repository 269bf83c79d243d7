//! In-memory repository implementation.
//!
//! All collections live behind one mutex, so the duplicate-run check and the
//! run + payslip pair insert are a single critical section.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    EmployeeProfile, Holiday, LeaveRecord, PayRule, Payslip, PayrollRun, SalaryHistory,
    SalaryStructure,
};

use super::PayrollRepository;

#[derive(Default)]
struct Inner {
    employees: HashMap<String, EmployeeProfile>,
    structures: HashMap<String, SalaryStructure>,
    salary_history: Vec<SalaryHistory>,
    leaves: Vec<LeaveRecord>,
    holidays: Vec<Holiday>,
    rules: Vec<PayRule>,
    runs: HashMap<Uuid, PayrollRun>,
    payslips: HashMap<Uuid, Payslip>,
}

/// Mutex-guarded in-memory store backing the HTTP service and tests.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> PayrollResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| PayrollError::Storage {
            message: "store mutex poisoned".to_string(),
        })
    }

    /// Seeds an employee and their salary structure.
    pub fn seed_employee(
        &self,
        profile: EmployeeProfile,
        structure: SalaryStructure,
    ) -> PayrollResult<()> {
        let mut inner = self.lock()?;
        inner.structures.insert(profile.id.clone(), structure);
        inner.employees.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Seeds a leave record.
    pub fn seed_leave(&self, leave: LeaveRecord) -> PayrollResult<()> {
        self.lock()?.leaves.push(leave);
        Ok(())
    }

    /// Seeds a holiday record.
    pub fn seed_holiday(&self, holiday: Holiday) -> PayrollResult<()> {
        self.lock()?.holidays.push(holiday);
        Ok(())
    }

    /// Seeds an earning/deduction rule.
    pub fn seed_rule(&self, rule: PayRule) -> PayrollResult<()> {
        self.lock()?.rules.push(rule);
        Ok(())
    }

    /// Salary-history snapshots for an employee, oldest first.
    pub fn salary_history(&self, employee_id: &str) -> PayrollResult<Vec<SalaryHistory>> {
        Ok(self
            .lock()?
            .salary_history
            .iter()
            .filter(|h| h.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

impl PayrollRepository for InMemoryStore {
    fn employee(&self, id: &str) -> PayrollResult<EmployeeProfile> {
        self.lock()?
            .employees
            .get(id)
            .cloned()
            .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })
    }

    fn salary_structure(&self, employee_id: &str) -> PayrollResult<SalaryStructure> {
        self.lock()?
            .structures
            .get(employee_id)
            .cloned()
            .ok_or_else(|| PayrollError::SalaryStructureNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn update_salary_structure(
        &self,
        structure: SalaryStructure,
        reason: &str,
        changed_by: &str,
        effective_from: NaiveDate,
    ) -> PayrollResult<()> {
        let mut inner = self.lock()?;
        if let Some(previous) = inner.structures.get(&structure.employee_id).cloned() {
            inner.salary_history.push(SalaryHistory {
                employee_id: previous.employee_id.clone(),
                effective_from,
                reason: reason.to_string(),
                changed_by: changed_by.to_string(),
                components: previous.components,
                gross_salary: previous.gross_salary,
                recorded_at: Utc::now(),
            });
        }
        inner
            .structures
            .insert(structure.employee_id.clone(), structure);
        Ok(())
    }

    fn leaves_overlapping(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> PayrollResult<Vec<LeaveRecord>> {
        Ok(self
            .lock()?
            .leaves
            .iter()
            .filter(|l| l.employee_id == employee_id && l.overlaps(start, end))
            .cloned()
            .collect())
    }

    fn holidays(&self) -> PayrollResult<Vec<Holiday>> {
        Ok(self.lock()?.holidays.clone())
    }

    fn pay_rules(&self) -> PayrollResult<Vec<PayRule>> {
        Ok(self.lock()?.rules.clone())
    }

    fn insert_run_and_payslip(&self, run: PayrollRun, payslip: Payslip) -> PayrollResult<()> {
        let mut inner = self.lock()?;

        let duplicate = inner.runs.values().any(|existing| {
            existing.employee_id == run.employee_id
                && existing.month == run.month
                && existing.year == run.year
                && existing.status.is_active()
        });
        if duplicate {
            return Err(PayrollError::AlreadyProcessed {
                employee_id: run.employee_id,
                month: run.month,
                year: run.year,
            });
        }

        inner.payslips.insert(payslip.id, payslip);
        inner.runs.insert(run.id, run);
        Ok(())
    }

    fn payroll_run(&self, id: Uuid) -> PayrollResult<PayrollRun> {
        self.lock()?
            .runs
            .get(&id)
            .cloned()
            .ok_or_else(|| PayrollError::PayrollRunNotFound { id: id.to_string() })
    }

    fn payslip(&self, id: Uuid) -> PayrollResult<Payslip> {
        self.lock()?
            .payslips
            .get(&id)
            .cloned()
            .ok_or_else(|| PayrollError::PayslipNotFound { id: id.to_string() })
    }

    fn set_payslip_remark(&self, id: Uuid, remark: Option<String>) -> PayrollResult<()> {
        let mut inner = self.lock()?;
        let payslip = inner
            .payslips
            .get_mut(&id)
            .ok_or_else(|| PayrollError::PayslipNotFound { id: id.to_string() })?;
        payslip.remark = remark;
        Ok(())
    }
}
