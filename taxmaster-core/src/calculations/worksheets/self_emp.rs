//! Self-employment tax calculation.
//!
//! Self-employment profit is reduced to a taxable base by the
//! employer-equivalent adjustment (92.35%). The Social-Security-equivalent
//! portion applies up to the annual wage cap; the Medicare-equivalent
//! portion applies to the full base. Half of the combined tax becomes an
//! above-the-line deduction against gross income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rules::FederalRules;

/// Result of the self-employment tax worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeWorksheetResult {
    /// SE profit × the employer-equivalent factor.
    pub net_earnings: Decimal,

    /// Social-Security-equivalent tax on the capped base.
    pub social_security_tax: Decimal,

    /// Medicare-equivalent tax on the full base.
    pub medicare_tax: Decimal,

    /// Combined self-employment tax.
    pub self_employment_tax: Decimal,

    /// Deductible half of the SE tax (reduces AGI).
    pub se_tax_deduction: Decimal,
}

/// Calculator for the self-employment tax worksheet.
#[derive(Debug, Clone, Copy)]
pub struct SeWorksheet<'a> {
    rules: &'a FederalRules,
}

impl<'a> SeWorksheet<'a> {
    pub fn new(rules: &'a FederalRules) -> Self {
        Self { rules }
    }

    /// Computes SE tax for the given (non-negative) self-employment
    /// profit. Zero profit yields an all-zero result.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxmaster_core::FederalRules;
    /// use taxmaster_core::calculations::SeWorksheet;
    ///
    /// let rules = FederalRules::year_2025();
    /// let result = SeWorksheet::new(&rules).calculate(dec!(50000));
    ///
    /// // 50,000 × 0.9235 = 46,175
    /// assert_eq!(result.net_earnings, dec!(46175.0000));
    /// assert_eq!(result.self_employment_tax, dec!(7064.775000));
    /// assert_eq!(result.se_tax_deduction, dec!(3532.3875000));
    /// ```
    pub fn calculate(&self, se_profit: Decimal) -> SeWorksheetResult {
        let net_earnings = self.net_earnings(se_profit);
        let social_security_tax = self.social_security_tax(net_earnings);
        let medicare_tax = self.medicare_tax(net_earnings);
        let self_employment_tax = social_security_tax + medicare_tax;
        let se_tax_deduction = self_employment_tax * self.rules.se_deduction_factor;

        SeWorksheetResult {
            net_earnings,
            social_security_tax,
            medicare_tax,
            self_employment_tax,
            se_tax_deduction,
        }
    }

    /// Applies the employer-equivalent adjustment to SE profit.
    fn net_earnings(&self, se_profit: Decimal) -> Decimal {
        se_profit * self.rules.net_earnings_factor
    }

    /// Social Security portion: the lesser of net earnings and the wage
    /// cap, times the combined SS rate.
    fn social_security_tax(&self, net_earnings: Decimal) -> Decimal {
        net_earnings.min(self.rules.ss_wage_max) * self.rules.ss_tax_rate
    }

    /// Medicare portion: the full net earnings times the combined rate.
    fn medicare_tax(&self, net_earnings: Decimal) -> Decimal {
        net_earnings * self.rules.medicare_tax_rate
    }
}
