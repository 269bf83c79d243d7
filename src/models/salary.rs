//! Salary structure and salary history models.
//!
//! A [`SalaryStructure`] is the configured, not-yet-prorated compensation for
//! an employee. Every mutation of a structure appends an immutable
//! [`SalaryHistory`] snapshot; the ledger is never edited or deleted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The named components that make up a salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Basic pay component.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance: Decimal,
    /// Special allowance.
    pub special_allowance: Decimal,
    /// Meal allowance.
    pub meal_allowance: Decimal,
}

impl SalaryComponents {
    /// Sum of all components.
    pub fn gross(&self) -> Decimal {
        self.basic + self.hra + self.conveyance + self.special_allowance + self.meal_allowance
    }

    /// Labelled (name, amount) pairs in payslip display order.
    pub fn labelled(&self) -> [(&'static str, Decimal); 5] {
        [
            ("Basic", self.basic),
            ("House Rent Allowance", self.hra),
            ("Conveyance Allowance", self.conveyance),
            ("Special Allowance", self.special_allowance),
            ("Meal Allowance", self.meal_allowance),
        ]
    }
}

/// The configured compensation for an employee.
///
/// One active structure exists per employee; enforcing that is the
/// responsibility of the surrounding service, not this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The employee this structure belongs to.
    pub employee_id: String,
    /// The component breakdown.
    pub components: SalaryComponents,
    /// Derived gross salary (sum of components), pre-proration.
    pub gross_salary: Decimal,
    /// Baseline net salary, pre-proration.
    pub net_salary: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// The date this structure takes effect.
    pub effective_from: NaiveDate,
    /// Optional tax identifier (e.g. PAN).
    #[serde(default)]
    pub tax_id: Option<String>,
}

impl SalaryStructure {
    /// Builds a structure from components, deriving the gross.
    ///
    /// The baseline net equals the gross until a payroll run applies
    /// deductions.
    pub fn from_components(
        employee_id: impl Into<String>,
        components: SalaryComponents,
        currency: impl Into<String>,
        effective_from: NaiveDate,
    ) -> Self {
        let gross = components.gross();
        Self {
            employee_id: employee_id.into(),
            components,
            gross_salary: gross,
            net_salary: gross,
            currency: currency.into(),
            effective_from,
            tax_id: None,
        }
    }
}

/// An append-only snapshot recorded whenever a salary structure changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryHistory {
    /// The employee whose salary changed.
    pub employee_id: String,
    /// When the new structure takes effect.
    pub effective_from: NaiveDate,
    /// Why the change was made (e.g. "annual appraisal").
    pub reason: String,
    /// Who made the change.
    pub changed_by: String,
    /// Full component snapshot at the time of the change.
    pub components: SalaryComponents,
    /// Gross salary at the time of the change.
    pub gross_salary: Decimal,
    /// When the snapshot was recorded.
    pub recorded_at: DateTime<Utc>,
}
