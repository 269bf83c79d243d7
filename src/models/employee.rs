//! Employee identity model.
//!
//! The engine never manages employee records itself; it only needs the
//! identity fields that appear on a rendered payslip.

use serde::{Deserialize, Serialize};

/// Identity details for an employee, as provided by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// Full display name, used for the payslip and its filename.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title.
    pub designation: String,
    /// Employee code printed on the payslip (e.g. "EMP-0042").
    pub code: String,
    /// Bank account the salary is paid to.
    pub bank_account: String,
}
