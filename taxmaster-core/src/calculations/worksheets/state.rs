//! State liability calculation: dispatch over the jurisdiction rule kind.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{floor_zero, marginal_tax};
use crate::models::JurisdictionRule;

/// Result of the state worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateWorksheetResult {
    /// AGI less the jurisdiction's standard deduction.
    pub taxable_income: Decimal,

    /// State tax owed under the jurisdiction's rule.
    pub liability: Decimal,
}

/// Calculator for the state worksheet.
#[derive(Debug, Clone, Copy)]
pub struct StateWorksheet<'a> {
    rule: &'a JurisdictionRule,
}

impl<'a> StateWorksheet<'a> {
    pub fn new(rule: &'a JurisdictionRule) -> Self {
        Self { rule }
    }

    /// Computes state taxable income and liability from federal AGI.
    /// No-tax jurisdictions always yield zero.
    pub fn calculate(&self, agi: Decimal) -> StateWorksheetResult {
        let taxable_income = floor_zero(agi - self.rule.standard_deduction());
        let liability = match self.rule {
            JurisdictionRule::None => Decimal::ZERO,
            JurisdictionRule::Flat { rate, .. } => taxable_income * *rate,
            JurisdictionRule::Progressive { brackets, .. } => {
                marginal_tax(taxable_income, brackets)
            }
        };

        StateWorksheetResult {
            taxable_income,
            liability,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Bracket;

    #[test]
    fn none_kind_owes_nothing_regardless_of_agi() {
        let result = StateWorksheet::new(&JurisdictionRule::None).calculate(dec!(10000000));

        assert_eq!(result.liability, Decimal::ZERO);
        assert_eq!(result.taxable_income, dec!(10000000));
    }

    #[test]
    fn flat_rule_taxes_agi_less_deduction() {
        let rule = JurisdictionRule::Flat {
            standard_deduction: dec!(5000),
            rate: dec!(0.05),
        };

        let result = StateWorksheet::new(&rule).calculate(dec!(105000));

        assert_eq!(result.taxable_income, dec!(100000));
        assert_eq!(result.liability, dec!(5000));
    }

    #[test]
    fn deduction_larger_than_agi_floors_at_zero() {
        let rule = JurisdictionRule::Flat {
            standard_deduction: dec!(5000),
            rate: dec!(0.05),
        };

        let result = StateWorksheet::new(&rule).calculate(dec!(3000));

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.liability, Decimal::ZERO);
    }

    #[test]
    fn progressive_rule_uses_the_marginal_schedule() {
        let rule = JurisdictionRule::Progressive {
            standard_deduction: dec!(0),
            brackets: vec![
                Bracket::new(dec!(0), Some(dec!(10000)), dec!(0.02)),
                Bracket::new(dec!(10000), None, dec!(0.05)),
            ],
        };

        let result = StateWorksheet::new(&rule).calculate(dec!(30000));

        // 10,000 × 2% + 20,000 × 5%
        assert_eq!(result.liability, dec!(1200));
    }
}
