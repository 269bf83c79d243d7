//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

use crate::models::RoundingMode;

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrollRequest {
    /// The employee to run payroll for.
    pub employee_id: String,
    /// Month of the pay period (1-12).
    pub month: u32,
    /// Year of the pay period.
    pub year: i32,
    /// The actor triggering the run, recorded on the payroll run.
    pub actor_id: String,
    /// Rounding applied to the final net figure; falls back to the
    /// configured default when omitted.
    #[serde(default)]
    pub rounding: Option<RoundingMode>,
}

/// Query parameters for `GET /payslips/{id}/document`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentQuery {
    /// Optional remark attached to the payslip before rendering.
    pub remark: Option<String>,
}
