//! Earning/deduction rule evaluation.
//!
//! Evaluates the active rules in ascending priority order against a set of
//! named base amounts and produces the applied-rule ledger plus totals.
//!
//! Every rule reads from the *initial* [`BaseValues`] snapshot; earlier
//! rules' amounts are never folded back into the bases within one pass.
//! This keeps evaluation order-independent for rules sharing a base (two
//! percentage-of-net rules see the same net) and is a fixed design
//! decision, not an accident.
//!
//! Rounding policy: each computed amount is rounded once to 2 decimal
//! places (midpoint away from zero) before it enters the ledger; totals and
//! the taxable-income adjustment are summed from those rounded amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AppliedRule, PayRule, RuleBase, RuleCategory, RuleKind};

/// The named base amounts a rule pass is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseValues {
    /// The basic salary component.
    pub basic: Decimal,
    /// The prorated gross for the period.
    pub gross: Decimal,
    /// The net base; equals gross at the start of a pass.
    pub net: Decimal,
    /// The taxable base; equals gross at the start of a pass.
    pub taxable: Decimal,
}

impl BaseValues {
    /// Builds the standard pass input: net and taxable start equal to gross.
    pub fn from_gross(basic: Decimal, gross: Decimal) -> Self {
        Self {
            basic,
            gross,
            net: gross,
            taxable: gross,
        }
    }

    fn amount_for(&self, base: RuleBase) -> Decimal {
        match base {
            RuleBase::Basic => self.basic,
            RuleBase::Gross => self.gross,
            RuleBase::Net => self.net,
            RuleBase::Taxable => self.taxable,
        }
    }
}

/// The outcome of one rule pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEvaluation {
    /// Ledger of applied rules in evaluation order.
    pub applied_rules: Vec<AppliedRule>,
    /// Sum of earning amounts.
    pub total_earnings: Decimal,
    /// Sum of deduction amounts.
    pub total_deductions: Decimal,
    /// Taxable income after taxable earnings were added and taxable
    /// deductions subtracted from the starting taxable base.
    pub taxable_income: Decimal,
}

fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Evaluates rules against the given bases.
///
/// `rules` may contain inactive entries and arrive in any order: the pass
/// filters to active rules and sorts ascending by priority, breaking ties
/// by name so the ledger order is deterministic.
///
/// This is a pure function: identical inputs always produce an identical
/// ledger and identical totals.
pub fn evaluate_rules(rules: &[PayRule], bases: &BaseValues) -> RuleEvaluation {
    let mut active: Vec<&PayRule> = rules.iter().filter(|r| r.active).collect();
    active.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

    let mut applied_rules = Vec::with_capacity(active.len());
    let mut total_earnings = Decimal::ZERO;
    let mut total_deductions = Decimal::ZERO;
    let mut taxable_income = bases.taxable;

    for rule in active {
        let base_amount = bases.amount_for(rule.base);
        let amount = match rule.kind {
            RuleKind::Fixed => round2(rule.value),
            RuleKind::Percentage => round2(base_amount * rule.value / Decimal::from(100)),
        };

        match rule.category {
            RuleCategory::Earning => {
                total_earnings += amount;
                if rule.is_taxable {
                    taxable_income += amount;
                }
            }
            RuleCategory::Deduction => {
                total_deductions += amount;
                if rule.is_taxable {
                    taxable_income -= amount;
                }
            }
        }

        applied_rules.push(AppliedRule {
            name: rule.name.clone(),
            category: rule.category,
            kind: rule.kind,
            base: rule.base,
            value: rule.value,
            amount,
        });
    }

    RuleEvaluation {
        applied_rules,
        total_earnings,
        total_deductions,
        taxable_income,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rule(
        name: &str,
        category: RuleCategory,
        kind: RuleKind,
        base: RuleBase,
        value: &str,
        is_taxable: bool,
        priority: i32,
    ) -> PayRule {
        PayRule {
            name: name.to_string(),
            category,
            kind,
            base,
            value: dec(value),
            is_taxable,
            priority,
            active: true,
        }
    }

    fn standard_deductions() -> Vec<PayRule> {
        vec![
            rule(
                "Provident Fund",
                RuleCategory::Deduction,
                RuleKind::Percentage,
                RuleBase::Basic,
                "12",
                false,
                1,
            ),
            rule(
                "Professional Tax",
                RuleCategory::Deduction,
                RuleKind::Fixed,
                RuleBase::Gross,
                "200",
                false,
                2,
            ),
            rule(
                "Health Insurance",
                RuleCategory::Deduction,
                RuleKind::Fixed,
                RuleBase::Gross,
                "300",
                false,
                3,
            ),
        ]
    }

    #[test]
    fn test_fixed_and_percentage_amounts() {
        let bases = BaseValues::from_gross(dec("30000"), dec("47000"));
        let eval = evaluate_rules(&standard_deductions(), &bases);

        assert_eq!(eval.applied_rules.len(), 3);
        assert_eq!(eval.applied_rules[0].amount, dec("3600.00"));
        assert_eq!(eval.applied_rules[1].amount, dec("200.00"));
        assert_eq!(eval.applied_rules[2].amount, dec("300.00"));
        assert_eq!(eval.total_deductions, dec("4100.00"));
        assert_eq!(eval.total_earnings, dec("0"));
    }

    #[test]
    fn test_inactive_rules_are_skipped() {
        let mut rules = standard_deductions();
        rules[1].active = false;

        let bases = BaseValues::from_gross(dec("30000"), dec("47000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.applied_rules.len(), 2);
        assert_eq!(eval.total_deductions, dec("3900.00"));
    }

    #[test]
    fn test_rules_are_ordered_by_priority() {
        let rules = vec![
            rule(
                "Second",
                RuleCategory::Deduction,
                RuleKind::Fixed,
                RuleBase::Gross,
                "10",
                false,
                5,
            ),
            rule(
                "First",
                RuleCategory::Earning,
                RuleKind::Fixed,
                RuleBase::Gross,
                "10",
                false,
                1,
            ),
        ];
        let bases = BaseValues::from_gross(dec("1000"), dec("1000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.applied_rules[0].name, "First");
        assert_eq!(eval.applied_rules[1].name, "Second");
    }

    #[test]
    fn test_priority_ties_break_by_name() {
        let rules = vec![
            rule("Zeta", RuleCategory::Earning, RuleKind::Fixed, RuleBase::Gross, "1", false, 1),
            rule("Alpha", RuleCategory::Earning, RuleKind::Fixed, RuleBase::Gross, "1", false, 1),
        ];
        let bases = BaseValues::from_gross(dec("0"), dec("0"));
        let eval = evaluate_rules(&rules, &bases);
        assert_eq!(eval.applied_rules[0].name, "Alpha");
    }

    #[test]
    fn test_taxable_earning_raises_taxable_income() {
        let rules = vec![rule(
            "Overtime Bonus",
            RuleCategory::Earning,
            RuleKind::Fixed,
            RuleBase::Gross,
            "1500",
            true,
            1,
        )];
        let bases = BaseValues::from_gross(dec("30000"), dec("47000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.total_earnings, dec("1500.00"));
        assert_eq!(eval.taxable_income, dec("48500.00"));
    }

    #[test]
    fn test_taxable_deduction_lowers_taxable_income() {
        let rules = vec![rule(
            "Provident Fund",
            RuleCategory::Deduction,
            RuleKind::Percentage,
            RuleBase::Basic,
            "12",
            true,
            1,
        )];
        let bases = BaseValues::from_gross(dec("30000"), dec("47000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.taxable_income, dec("43400.00"));
    }

    #[test]
    fn test_non_taxable_rules_leave_taxable_income_at_gross() {
        let bases = BaseValues::from_gross(dec("30000"), dec("47000"));
        let eval = evaluate_rules(&standard_deductions(), &bases);
        assert_eq!(eval.taxable_income, dec("47000"));
    }

    #[test]
    fn test_rules_never_compound_within_a_pass() {
        // Two 10%-of-net deductions: with compounding the second would see
        // 900 and take 90; without, both take 100 from the initial net.
        let rules = vec![
            rule("Levy A", RuleCategory::Deduction, RuleKind::Percentage, RuleBase::Net, "10", false, 1),
            rule("Levy B", RuleCategory::Deduction, RuleKind::Percentage, RuleBase::Net, "10", false, 2),
        ];
        let bases = BaseValues::from_gross(dec("1000"), dec("1000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.applied_rules[0].amount, dec("100.00"));
        assert_eq!(eval.applied_rules[1].amount, dec("100.00"));
        assert_eq!(eval.total_deductions, dec("200.00"));
    }

    #[test]
    fn test_amounts_are_rounded_to_two_decimals() {
        // 1/3 of 100 = 33.333... -> 33.33
        let rules = vec![rule(
            "Odd Percentage",
            RuleCategory::Deduction,
            RuleKind::Percentage,
            RuleBase::Gross,
            "0.3333",
            false,
            1,
        )];
        let bases = BaseValues::from_gross(dec("0"), dec("10000"));
        let eval = evaluate_rules(&rules, &bases);

        assert_eq!(eval.applied_rules[0].amount, dec("33.33"));
        assert_eq!(eval.total_deductions, dec("33.33"));
    }

    proptest! {
        /// Determinism: the same rules and bases always produce an identical
        /// ledger and totals.
        #[test]
        fn prop_evaluation_is_deterministic(
            values in prop::collection::vec(0u32..1_000_000, 1..8),
            gross in 0u32..10_000_000,
        ) {
            let rules: Vec<PayRule> = values
                .iter()
                .enumerate()
                .map(|(i, v)| rule(
                    &format!("rule_{i}"),
                    if i % 2 == 0 { RuleCategory::Deduction } else { RuleCategory::Earning },
                    if i % 3 == 0 { RuleKind::Fixed } else { RuleKind::Percentage },
                    RuleBase::Gross,
                    &(v % 100).to_string(),
                    i % 2 == 1,
                    (i as i32) % 3,
                ))
                .collect();
            let bases = BaseValues::from_gross(Decimal::from(gross / 2), Decimal::from(gross));

            let first = evaluate_rules(&rules, &bases);
            let second = evaluate_rules(&rules, &bases);
            prop_assert_eq!(first, second);
        }
    }
}
