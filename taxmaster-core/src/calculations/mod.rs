//! The tax engine: a pure function from inputs and rule tables to a
//! [`TaxResult`]. Stateless and side-effect-free; safe to call
//! concurrently against the same shared rule tables.

pub mod common;
pub mod worksheets;

pub use common::marginal_tax;
pub use worksheets::{
    FederalWorksheet, FederalWorksheetResult, SeWorksheet, SeWorksheetResult, StateWorksheet,
    StateWorksheetResult,
};

use crate::models::{JurisdictionTable, TaxInputs, TaxResult};
use crate::rules::FederalRules;

/// Computes the full federal and state liability for one scenario.
///
/// Total over its input domain: negative amounts are clamped to zero on
/// entry and every intermediate floor clamps rather than failing.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxmaster_core::{FederalRules, TaxInputs, compute, us_states};
///
/// let inputs = TaxInputs {
///     salary: dec!(80000),
///     jurisdiction: "Texas".to_string(),
///     ..TaxInputs::default()
/// };
///
/// let result = compute(&inputs, &FederalRules::year_2025(), &us_states());
///
/// assert_eq!(result.agi, dec!(80000));
/// assert_eq!(result.state_liability, dec!(0));
/// ```
pub fn compute(
    inputs: &TaxInputs,
    federal: &FederalRules,
    states: &JurisdictionTable,
) -> TaxResult {
    let inputs = inputs.sanitized();

    let se = SeWorksheet::new(federal).calculate(inputs.self_employment_profit);
    let fed = FederalWorksheet::new(federal).calculate(&inputs, &se);
    let state = StateWorksheet::new(states.rule(&inputs.jurisdiction)).calculate(fed.agi);

    TaxResult {
        federal_liability: fed.federal_liability,
        state_liability: state.liability,
        agi: fed.agi,
        federal_taxable_income: fed.taxable_income,
        ordinary_tax: fed.ordinary_tax,
        self_employment_tax: se.self_employment_tax,
        lt_gains_tax: fed.lt_gains_tax,
        additional_medicare_tax: fed.additional_medicare_tax,
        net_investment_income_tax: fed.net_investment_income_tax,
        child_tax_credit: fed.child_tax_credit,
    }
}
