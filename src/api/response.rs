//! Response types for the payroll engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{AppliedRule, PayrollRun, Payslip};

/// Response body for a successful payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPayrollResponse {
    /// Identifier of the created payroll run.
    pub payroll_run_id: Uuid,
    /// Identifier of the created payslip.
    pub payslip_id: Uuid,
    /// The employee the run was computed for.
    pub employee_id: String,
    /// Month of the pay period.
    pub month: u32,
    /// Year of the pay period.
    pub year: i32,
    /// Working days used as the proration denominator.
    pub working_days: u32,
    /// Working days minus unpaid leave days.
    pub present_days: u32,
    /// Paid leave days in the period.
    pub paid_leave_days: u32,
    /// Unpaid leave days in the period.
    pub unpaid_leave_days: u32,
    /// Holiday dates within the period.
    pub holiday_count: u32,
    /// Prorated gross before the rule pass.
    pub gross_before_deductions: Decimal,
    /// Total earnings from the rule pass.
    pub total_earnings: Decimal,
    /// Total deductions from the rule pass.
    pub total_deductions: Decimal,
    /// Taxable income after taxable-rule adjustments.
    pub taxable_income: Decimal,
    /// Final net pay.
    pub net_pay: Decimal,
    /// The frozen applied-rule ledger.
    pub applied_rules: Vec<AppliedRule>,
}

impl RunPayrollResponse {
    /// Builds the response from the persisted pair.
    pub fn from_records(run: &PayrollRun, payslip: &Payslip) -> Self {
        Self {
            payroll_run_id: run.id,
            payslip_id: payslip.id,
            employee_id: run.employee_id.clone(),
            month: run.month,
            year: run.year,
            working_days: run.working_days,
            present_days: run.present_days,
            paid_leave_days: run.paid_leave_days,
            unpaid_leave_days: run.unpaid_leave_days,
            holiday_count: run.holiday_count,
            gross_before_deductions: run.gross_before_deductions,
            total_earnings: run.total_earnings,
            total_deductions: run.total_deductions,
            taxable_income: run.taxable_income,
            net_pay: run.net_pay,
            applied_rules: run.applied_rules.clone(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::InvalidArgument { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("The '{field}' argument was rejected"),
                ),
            },
            PayrollError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", message),
            },
            PayrollError::SalaryStructureNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("SALARY_STRUCTURE_NOT_FOUND", message),
            },
            PayrollError::PayrollRunNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PAYROLL_RUN_NOT_FOUND", message),
            },
            PayrollError::PayslipNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("PAYSLIP_NOT_FOUND", message),
            },
            PayrollError::AlreadyProcessed { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ALREADY_PROCESSED",
                    message,
                    "No new payroll run was created",
                ),
            },
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParse { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", message),
                }
            }
            PayrollError::Storage { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("STORAGE_ERROR", message),
            },
            PayrollError::Render { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("RENDER_ERROR", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Skipped when None
    }

    #[test]
    fn test_already_processed_maps_to_conflict() {
        let error = PayrollError::AlreadyProcessed {
            employee_id: "emp_001".to_string(),
            month: 3,
            year: 2025,
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "ALREADY_PROCESSED");
    }

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let error = PayrollError::invalid("month", "must be between 1 and 12");
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_not_found_family_maps_to_404() {
        for error in [
            PayrollError::EmployeeNotFound {
                id: "x".to_string(),
            },
            PayrollError::SalaryStructureNotFound {
                employee_id: "x".to_string(),
            },
            PayrollError::PayslipNotFound {
                id: "x".to_string(),
            },
        ] {
            let response: ApiErrorResponse = error.into();
            assert_eq!(response.status, StatusCode::NOT_FOUND);
        }
    }
}
