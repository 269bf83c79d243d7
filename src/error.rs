//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation and
//! payslip rendering.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A request argument was malformed or out of range.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made it invalid.
        message: String,
    },

    /// The employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The employee has no configured salary structure.
    #[error("No salary structure configured for employee {employee_id}")]
    SalaryStructureNotFound {
        /// The employee whose salary structure is missing.
        employee_id: String,
    },

    /// The payroll run does not exist.
    #[error("Payroll run not found: {id}")]
    PayrollRunNotFound {
        /// The run id that was not found.
        id: String,
    },

    /// The payslip does not exist.
    #[error("Payslip not found: {id}")]
    PayslipNotFound {
        /// The payslip id that was not found.
        id: String,
    },

    /// An active payroll run already exists for this employee and period.
    #[error("Payroll already processed for employee {employee_id} in {month}/{year}")]
    AlreadyProcessed {
        /// The employee the duplicate run was attempted for.
        employee_id: String,
        /// The month of the duplicate run.
        month: u32,
        /// The year of the duplicate run.
        year: i32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage layer failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// The payslip document could not be produced.
    #[error("Render error: {message}")]
    Render {
        /// A description of the render failure.
        message: String,
    },
}

impl PayrollError {
    /// Convenience constructor for [`PayrollError::InvalidArgument`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_displays_field_and_message() {
        let error = PayrollError::invalid("month", "must be between 1 and 12");
        assert_eq!(
            error.to_string(),
            "Invalid argument 'month': must be between 1 and 12"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = PayrollError::EmployeeNotFound {
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: emp_404");
    }

    #[test]
    fn test_salary_structure_not_found_displays_employee() {
        let error = PayrollError::SalaryStructureNotFound {
            employee_id: "emp_001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No salary structure configured for employee emp_001"
        );
    }

    #[test]
    fn test_already_processed_displays_period() {
        let error = PayrollError::AlreadyProcessed {
            employee_id: "emp_001".to_string(),
            month: 3,
            year: 2025,
        };
        assert_eq!(
            error.to_string(),
            "Payroll already processed for employee emp_001 in 3/2025"
        );
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = PayrollError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PayrollResult<()> {
            Err(PayrollError::PayslipNotFound {
                id: "slip_1".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
