//! Earning/deduction rule model.
//!
//! Rules are global configuration, not per-employee. The rule engine
//! evaluates the active subset in ascending priority order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a rule adds to or subtracts from pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Adds to total earnings.
    Earning,
    /// Adds to total deductions.
    Deduction,
}

/// How a rule's amount is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A flat amount, taken directly from the rule's value.
    Fixed,
    /// A percentage of a named base amount.
    Percentage,
}

/// The named base a percentage rule is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleBase {
    /// The basic salary component.
    Basic,
    /// The prorated gross for the period.
    Gross,
    /// The running net figure (equals gross at evaluation start).
    Net,
    /// The taxable income figure (equals gross at evaluation start).
    Taxable,
}

/// A configured earning or deduction rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRule {
    /// Display name (e.g. "Provident Fund").
    pub name: String,
    /// Earning or deduction.
    pub category: RuleCategory,
    /// Fixed amount or percentage.
    pub kind: RuleKind,
    /// The base a percentage is computed against. Ignored for fixed rules.
    pub base: RuleBase,
    /// Flat amount for fixed rules, percentage points for percentage rules.
    pub value: Decimal,
    /// Whether the amount feeds into the taxable-income adjustment.
    pub is_taxable: bool,
    /// Evaluation order; lower priorities run first.
    pub priority: i32,
    /// Inactive rules are skipped entirely.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_pay_rule() {
        let json = r#"{
            "name": "Provident Fund",
            "category": "deduction",
            "kind": "percentage",
            "base": "basic",
            "value": "12",
            "is_taxable": false,
            "priority": 1,
            "active": true
        }"#;

        let rule: PayRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.name, "Provident Fund");
        assert_eq!(rule.category, RuleCategory::Deduction);
        assert_eq!(rule.kind, RuleKind::Percentage);
        assert_eq!(rule.base, RuleBase::Basic);
        assert_eq!(rule.value, Decimal::from_str("12").unwrap());
    }

    #[test]
    fn test_rule_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&RuleCategory::Earning).unwrap(),
            "\"earning\""
        );
        assert_eq!(serde_json::to_string(&RuleKind::Fixed).unwrap(), "\"fixed\"");
        assert_eq!(
            serde_json::to_string(&RuleBase::Taxable).unwrap(),
            "\"taxable\""
        );
    }
}
