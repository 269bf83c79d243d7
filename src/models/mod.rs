//! Domain models for the payroll engine.

mod employee;
mod holiday;
mod leave;
mod payroll_run;
mod payslip;
mod rule;
mod salary;

pub use employee::EmployeeProfile;
pub use holiday::Holiday;
pub use leave::{LeaveRecord, LeaveStatus, LeaveType};
pub use payroll_run::{AppliedRule, PayrollRun, RoundingMode, RunStatus};
pub use payslip::Payslip;
pub use rule::{PayRule, RuleBase, RuleCategory, RuleKind};
pub use salary::{SalaryComponents, SalaryHistory, SalaryStructure};
