//! Federal liability calculation: AGI, deduction choice, the ordinary
//! bracket schedule, long-term gains, surtaxes and the child tax credit.
//!
//! Ordering matters: the tips/overtime cliff and the SE deduction feed
//! AGI, AGI feeds taxable income and the NIIT base, and taxable income
//! selects the long-term gains rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{floor_zero, marginal_tax};
use crate::calculations::worksheets::self_emp::SeWorksheetResult;
use crate::models::TaxInputs;
use crate::rules::FederalRules;

/// Result of the federal worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalWorksheetResult {
    /// Tips deduction actually allowed (zero at or above the cliff).
    pub tips_deduction: Decimal,

    /// Overtime deduction actually allowed (zero at or above the cliff).
    pub overtime_deduction: Decimal,

    /// Adjusted gross income.
    pub agi: Decimal,

    /// The deduction taken: the larger of standard and itemized.
    pub deduction: Decimal,

    /// Whether itemizing strictly beat the standard deduction.
    pub used_itemized: bool,

    /// Federal taxable income.
    pub taxable_income: Decimal,

    /// Tax from the ordinary bracket schedule.
    pub ordinary_tax: Decimal,

    /// Long-term gains taxed at the applicable flat rate.
    pub lt_gains_tax: Decimal,

    /// 0.9% surtax on earned income over the threshold.
    pub additional_medicare_tax: Decimal,

    /// 3.8% surtax on investment income over the AGI threshold.
    pub net_investment_income_tax: Decimal,

    /// Child tax credit applied.
    pub child_tax_credit: Decimal,

    /// Total federal liability, floored at zero.
    pub federal_liability: Decimal,
}

/// Calculator for the federal worksheet.
#[derive(Debug, Clone, Copy)]
pub struct FederalWorksheet<'a> {
    rules: &'a FederalRules,
}

impl<'a> FederalWorksheet<'a> {
    pub fn new(rules: &'a FederalRules) -> Self {
        Self { rules }
    }

    /// Computes the full federal side for sanitized inputs and an
    /// already-computed SE worksheet result.
    pub fn calculate(
        &self,
        inputs: &TaxInputs,
        se: &SeWorksheetResult,
    ) -> FederalWorksheetResult {
        let gross_income = self.gross_income(inputs);
        let (tips_deduction, overtime_deduction) =
            self.tips_and_overtime_deductions(inputs, gross_income);

        let agi = floor_zero(
            gross_income
                - inputs.pretax_contributions
                - inputs.student_loan_interest
                - tips_deduction
                - overtime_deduction
                - se.se_tax_deduction,
        );

        let (deduction, used_itemized) = self.choose_deduction(inputs);
        let taxable_income = floor_zero(agi - deduction);

        let ordinary_tax = marginal_tax(
            taxable_income,
            self.rules.brackets.for_status(inputs.filing_status),
        );
        let lt_gains_tax = self.lt_gains_tax(inputs, taxable_income);
        let additional_medicare_tax = self.additional_medicare_tax(inputs);
        let net_investment_income_tax = self.net_investment_income_tax(inputs, agi);
        let child_tax_credit =
            Decimal::from(inputs.dependent_count) * self.rules.child_tax_credit_per_child;

        let federal_liability = floor_zero(
            ordinary_tax
                + se.self_employment_tax
                + lt_gains_tax
                + additional_medicare_tax
                + net_investment_income_tax
                - child_tax_credit,
        );

        FederalWorksheetResult {
            tips_deduction,
            overtime_deduction,
            agi,
            deduction,
            used_itemized,
            taxable_income,
            ordinary_tax,
            lt_gains_tax,
            additional_medicare_tax,
            net_investment_income_tax,
            child_tax_credit,
            federal_liability,
        }
    }

    /// Total gross income; also the base the tips/overtime cliff tests.
    fn gross_income(&self, inputs: &TaxInputs) -> Decimal {
        inputs.salary
            + inputs.self_employment_profit
            + inputs.short_term_gains
            + inputs.long_term_gains
            + inputs.dividends
    }

    /// Tips and overtime deductions, capped, with a hard cliff: at or
    /// above the phase-out threshold both deductions are zero.
    fn tips_and_overtime_deductions(
        &self,
        inputs: &TaxInputs,
        phase_base: Decimal,
    ) -> (Decimal, Decimal) {
        let threshold = self
            .rules
            .deduction_phase_out_threshold
            .for_status(inputs.filing_status);
        if phase_base >= *threshold {
            return (Decimal::ZERO, Decimal::ZERO);
        }

        let tips = inputs.qualified_tips.min(self.rules.tips_deduction_cap);
        let overtime = inputs.qualified_overtime.min(
            *self
                .rules
                .overtime_deduction_cap
                .for_status(inputs.filing_status),
        );
        (tips, overtime)
    }

    /// The larger of the standard deduction and itemized deductions
    /// (mortgage interest plus SALT up to the cap). Itemizing is chosen
    /// only when it strictly helps.
    fn choose_deduction(&self, inputs: &TaxInputs) -> (Decimal, bool) {
        let standard = *self
            .rules
            .standard_deduction
            .for_status(inputs.filing_status);
        let itemized = inputs.mortgage_interest + inputs.salt_paid.min(self.rules.salt_cap);
        if itemized > standard {
            (itemized, true)
        } else {
            (standard, false)
        }
    }

    /// Long-term gains tax: a single flat rate (0% / 15% / 20%) selected
    /// by where taxable income falls, applied to the whole gains amount.
    /// The rate test deliberately uses taxable income as computed rather
    /// than stacking the gains on top of ordinary income.
    fn lt_gains_tax(&self, inputs: &TaxInputs, taxable_income: Decimal) -> Decimal {
        if inputs.long_term_gains <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let status = inputs.filing_status;
        let rate = if taxable_income <= *self.rules.ltcg_zero_rate_max.for_status(status) {
            Decimal::ZERO
        } else if taxable_income <= *self.rules.ltcg_mid_rate_max.for_status(status) {
            self.rules.ltcg_mid_rate
        } else {
            self.rules.ltcg_top_rate
        };
        inputs.long_term_gains * rate
    }

    /// 0.9% of earned income (salary + SE profit) over the threshold.
    fn additional_medicare_tax(&self, inputs: &TaxInputs) -> Decimal {
        let earned = inputs.salary + inputs.self_employment_profit;
        let threshold = self
            .rules
            .additional_medicare_threshold
            .for_status(inputs.filing_status);
        floor_zero(earned - *threshold) * self.rules.additional_medicare_rate
    }

    /// 3.8% of the lesser of net investment income and the AGI excess
    /// over the threshold.
    fn net_investment_income_tax(&self, inputs: &TaxInputs, agi: Decimal) -> Decimal {
        let investment_income =
            inputs.short_term_gains + inputs.long_term_gains + inputs.dividends;
        let threshold = self.rules.niit_threshold.for_status(inputs.filing_status);
        investment_income.min(floor_zero(agi - *threshold)) * self.rules.niit_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::worksheets::self_emp::SeWorksheet;
    use crate::models::FilingStatus;

    fn run(inputs: TaxInputs) -> FederalWorksheetResult {
        let rules = FederalRules::year_2025();
        let inputs = inputs.sanitized();
        let se = SeWorksheet::new(&rules).calculate(inputs.self_employment_profit);
        FederalWorksheet::new(&rules).calculate(&inputs, &se)
    }

    // =========================================================================
    // Tips / overtime cliff
    // =========================================================================

    #[test]
    fn deductions_apply_in_full_below_the_cliff() {
        let result = run(TaxInputs {
            salary: dec!(100000),
            qualified_tips: dec!(30000),
            qualified_overtime: dec!(20000),
            ..TaxInputs::default()
        });

        assert_eq!(result.tips_deduction, dec!(25000));
        assert_eq!(result.overtime_deduction, dec!(12500));
    }

    #[test]
    fn deductions_vanish_at_exactly_the_threshold() {
        let result = run(TaxInputs {
            salary: dec!(150000),
            qualified_tips: dec!(5000),
            qualified_overtime: dec!(5000),
            ..TaxInputs::default()
        });

        assert_eq!(result.tips_deduction, Decimal::ZERO);
        assert_eq!(result.overtime_deduction, Decimal::ZERO);
    }

    #[test]
    fn deductions_survive_just_below_the_threshold() {
        let result = run(TaxInputs {
            salary: dec!(149999.99),
            qualified_tips: dec!(5000),
            qualified_overtime: dec!(5000),
            ..TaxInputs::default()
        });

        assert_eq!(result.tips_deduction, dec!(5000));
        assert_eq!(result.overtime_deduction, dec!(5000));
    }

    #[test]
    fn joint_filers_use_the_higher_cliff_and_overtime_cap() {
        let result = run(TaxInputs {
            filing_status: FilingStatus::MarriedFilingJointly,
            salary: dec!(250000),
            qualified_overtime: dec!(30000),
            ..TaxInputs::default()
        });

        assert_eq!(result.overtime_deduction, dec!(25000));
    }

    // =========================================================================
    // Deduction choice
    // =========================================================================

    #[test]
    fn standard_deduction_wins_unless_itemizing_strictly_helps() {
        let result = run(TaxInputs {
            salary: dec!(80000),
            mortgage_interest: dec!(10000),
            salt_paid: dec!(5750),
            ..TaxInputs::default()
        });

        // Itemized exactly equals the 15,750 standard deduction.
        assert_eq!(result.deduction, dec!(15750));
        assert!(!result.used_itemized);
    }

    #[test]
    fn salt_is_capped_when_itemizing() {
        let result = run(TaxInputs {
            salary: dec!(500000),
            mortgage_interest: dec!(20000),
            salt_paid: dec!(90000),
            ..TaxInputs::default()
        });

        // 20,000 mortgage + min(90,000, 40,000) SALT
        assert_eq!(result.deduction, dec!(60000));
        assert!(result.used_itemized);
    }

    // =========================================================================
    // Long-term gains rate selection
    // =========================================================================

    #[test]
    fn lt_gains_rate_is_zero_below_the_first_threshold() {
        let result = run(TaxInputs {
            salary: dec!(40000),
            long_term_gains: dec!(10000),
            ..TaxInputs::default()
        });

        assert_eq!(result.lt_gains_tax, Decimal::ZERO);
    }

    #[test]
    fn lt_gains_rate_is_fifteen_percent_in_the_middle_band() {
        let result = run(TaxInputs {
            salary: dec!(100000),
            long_term_gains: dec!(10000),
            ..TaxInputs::default()
        });

        assert_eq!(result.lt_gains_tax, dec!(1500));
    }

    #[test]
    fn lt_gains_rate_is_twenty_percent_above_the_second_threshold() {
        let result = run(TaxInputs {
            salary: dec!(400000),
            long_term_gains: dec!(10000),
            ..TaxInputs::default()
        });

        assert_eq!(result.lt_gains_tax, dec!(2000));
    }

    #[test]
    fn zero_gains_pay_no_gains_tax_at_any_income() {
        let result = run(TaxInputs {
            salary: dec!(1000000),
            ..TaxInputs::default()
        });

        assert_eq!(result.lt_gains_tax, Decimal::ZERO);
    }

    // =========================================================================
    // Surtaxes
    // =========================================================================

    #[test]
    fn additional_medicare_applies_to_earned_income_over_threshold() {
        let result = run(TaxInputs {
            salary: dec!(250000),
            ..TaxInputs::default()
        });

        // (250,000 − 200,000) × 0.9%
        assert_eq!(result.additional_medicare_tax, dec!(450));
    }

    #[test]
    fn niit_is_limited_by_the_agi_excess() {
        let result = run(TaxInputs {
            salary: dec!(195000),
            dividends: dec!(20000),
            ..TaxInputs::default()
        });

        // AGI 215,000; excess over 200,000 is 15,000 < 20,000 dividends.
        assert_eq!(result.net_investment_income_tax, dec!(15000) * dec!(0.038));
    }

    #[test]
    fn niit_is_zero_below_the_threshold() {
        let result = run(TaxInputs {
            salary: dec!(100000),
            dividends: dec!(20000),
            ..TaxInputs::default()
        });

        assert_eq!(result.net_investment_income_tax, Decimal::ZERO);
    }

    // =========================================================================
    // Child credit and the liability floor
    // =========================================================================

    #[test]
    fn child_credit_reduces_liability() {
        let with_kids = run(TaxInputs {
            salary: dec!(80000),
            dependent_count: 2,
            ..TaxInputs::default()
        });
        let without = run(TaxInputs {
            salary: dec!(80000),
            ..TaxInputs::default()
        });

        assert_eq!(with_kids.child_tax_credit, dec!(4400));
        assert_eq!(
            with_kids.federal_liability,
            without.federal_liability - dec!(4400)
        );
    }

    #[test]
    fn liability_floors_at_zero_when_credit_exceeds_tax() {
        let result = run(TaxInputs {
            salary: dec!(20000),
            dependent_count: 6,
            ..TaxInputs::default()
        });

        assert_eq!(result.federal_liability, Decimal::ZERO);
    }
}
