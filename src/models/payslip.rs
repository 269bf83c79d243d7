//! Payslip model.
//!
//! A [`Payslip`] carries a denormalized snapshot of the salary components at
//! generation time. The renderer reads only this snapshot plus the parent
//! run, so a later salary-structure edit never changes an already issued
//! payslip. Monetary fields are immutable once created; only the free-text
//! remark may change before rendering.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::salary::SalaryComponents;

/// An issued payslip for one payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier of the payslip.
    pub id: Uuid,
    /// The payroll run this payslip belongs to.
    pub payroll_run_id: Uuid,
    /// The employee the payslip was issued to.
    pub employee_id: String,
    /// Month of the pay period (1-12).
    pub month: u32,
    /// Year of the pay period.
    pub year: i32,
    /// Salary components as configured when the run was created.
    pub components: SalaryComponents,
    /// Configured gross salary at generation time.
    pub gross_salary: Decimal,
    /// Configured baseline net salary at generation time.
    pub net_salary: Decimal,
    /// Currency code copied from the structure.
    pub currency: String,
    /// Prorated gross copied from the run.
    pub gross_before_deductions: Decimal,
    /// Total deductions copied from the run.
    pub total_deductions: Decimal,
    /// Net pay copied from the run.
    pub net_pay: Decimal,
    /// Optional advisory remark; last write wins.
    #[serde(default)]
    pub remark: Option<String>,
    /// When the payslip was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_payslip_round_trip() {
        let dec = |s: &str| Decimal::from_str(s).unwrap();
        let payslip = Payslip {
            id: Uuid::new_v4(),
            payroll_run_id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            month: 3,
            year: 2025,
            components: SalaryComponents {
                basic: dec("30000"),
                hra: dec("12000"),
                conveyance: dec("0"),
                special_allowance: dec("5000"),
                meal_allowance: dec("0"),
            },
            gross_salary: dec("47000"),
            net_salary: dec("47000"),
            currency: "INR".to_string(),
            gross_before_deductions: dec("47000.00"),
            total_deductions: dec("4100.00"),
            net_pay: dec("42900"),
            remark: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&payslip).unwrap();
        let back: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(payslip, back);
    }

    #[test]
    fn test_remark_defaults_to_none() {
        let json = serde_json::json!({
            "id": Uuid::nil(),
            "payroll_run_id": Uuid::nil(),
            "employee_id": "emp_001",
            "month": 3,
            "year": 2025,
            "components": {
                "basic": "30000", "hra": "12000", "conveyance": "0",
                "special_allowance": "5000", "meal_allowance": "0"
            },
            "gross_salary": "47000",
            "net_salary": "47000",
            "currency": "INR",
            "gross_before_deductions": "47000.00",
            "total_deductions": "4100.00",
            "net_pay": "42900",
            "created_at": "2025-04-01T00:00:00Z"
        });
        let payslip: Payslip = serde_json::from_value(json).unwrap();
        assert!(payslip.remark.is_none());
    }
}
