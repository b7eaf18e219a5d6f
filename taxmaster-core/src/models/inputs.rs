use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// One tax scenario as entered by the user.
///
/// All monetary fields are annual amounts in whole dollars and cents.
/// Constructed fresh per calculation and never mutated afterwards; the
/// engine reads it through [`TaxInputs::sanitized`], which clamps any
/// negative amount to zero so partial or nonsensical input still yields
/// a defined result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInputs {
    pub filing_status: FilingStatus,

    /// Children qualifying for the child tax credit.
    pub dependent_count: u32,

    // Earned income
    pub salary: Decimal,
    pub self_employment_profit: Decimal,
    pub qualified_tips: Decimal,
    pub qualified_overtime: Decimal,

    // Investment income
    pub short_term_gains: Decimal,
    pub long_term_gains: Decimal,
    pub dividends: Decimal,

    // Above-the-line and itemizable deductions
    pub pretax_contributions: Decimal,
    pub student_loan_interest: Decimal,
    pub mortgage_interest: Decimal,
    pub salt_paid: Decimal,

    /// State of residence; key into the jurisdiction rule table.
    /// Unknown names resolve to the no-tax rule.
    pub jurisdiction: String,
}

impl Default for TaxInputs {
    /// The empty scenario: every amount zero, Single, no dependents, no
    /// state. This is the single place where "absent field" defaults are
    /// defined; session loading and CLI merging both go through it.
    fn default() -> Self {
        Self {
            filing_status: FilingStatus::Single,
            dependent_count: 0,
            salary: Decimal::ZERO,
            self_employment_profit: Decimal::ZERO,
            qualified_tips: Decimal::ZERO,
            qualified_overtime: Decimal::ZERO,
            short_term_gains: Decimal::ZERO,
            long_term_gains: Decimal::ZERO,
            dividends: Decimal::ZERO,
            pretax_contributions: Decimal::ZERO,
            student_loan_interest: Decimal::ZERO,
            mortgage_interest: Decimal::ZERO,
            salt_paid: Decimal::ZERO,
            jurisdiction: String::new(),
        }
    }
}

impl TaxInputs {
    /// Returns a copy with every monetary field clamped at zero.
    pub fn sanitized(&self) -> Self {
        let clamp = |d: Decimal| d.max(Decimal::ZERO);
        Self {
            filing_status: self.filing_status,
            dependent_count: self.dependent_count,
            salary: clamp(self.salary),
            self_employment_profit: clamp(self.self_employment_profit),
            qualified_tips: clamp(self.qualified_tips),
            qualified_overtime: clamp(self.qualified_overtime),
            short_term_gains: clamp(self.short_term_gains),
            long_term_gains: clamp(self.long_term_gains),
            dividends: clamp(self.dividends),
            pretax_contributions: clamp(self.pretax_contributions),
            student_loan_interest: clamp(self.student_loan_interest),
            mortgage_interest: clamp(self.mortgage_interest),
            salt_paid: clamp(self.salt_paid),
            jurisdiction: self.jurisdiction.clone(),
        }
    }
}
