use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived liabilities for one scenario.
///
/// Every field is computed by [`crate::compute`] in a single pass and
/// consumed by the presentation layer; nothing here has an independent
/// lifecycle. Amounts are unrounded; display rounding belongs to the
/// export layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Total federal liability after all components and credits,
    /// floored at zero.
    pub federal_liability: Decimal,

    /// State liability under the scenario's jurisdiction rule.
    pub state_liability: Decimal,

    /// Adjusted gross income.
    pub agi: Decimal,

    /// AGI less the chosen (standard or itemized) deduction.
    pub federal_taxable_income: Decimal,

    /// Tax from the ordinary bracket schedule alone.
    pub ordinary_tax: Decimal,

    /// Self-employment tax (Social Security + Medicare equivalents).
    pub self_employment_tax: Decimal,

    /// Long-term capital gains tax at the applicable flat rate.
    pub lt_gains_tax: Decimal,

    /// 0.9% additional Medicare tax on earned income over the threshold.
    pub additional_medicare_tax: Decimal,

    /// 3.8% net investment income tax.
    pub net_investment_income_tax: Decimal,

    /// Child tax credit applied against federal liability.
    pub child_tax_credit: Decimal,
}
