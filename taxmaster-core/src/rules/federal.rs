use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{Bracket, FilingStatus};

/// A filing-status-dependent parameter pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByStatus<T> {
    pub single: T,
    pub joint: T,
}

impl<T> ByStatus<T> {
    pub fn for_status(&self, status: FilingStatus) -> &T {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.joint,
        }
    }
}

/// Federal rates, caps and thresholds for one tax year.
///
/// These values change year to year; everything the federal worksheets
/// consume is collected here so a future year is a new constructor, not
/// a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalRules {
    // Self-employment tax
    /// Maximum earnings subject to the Social Security portion.
    pub ss_wage_max: Decimal,
    /// Combined employer + employee Social Security rate.
    pub ss_tax_rate: Decimal,
    /// Combined employer + employee Medicare rate.
    pub medicare_tax_rate: Decimal,
    /// Employer-equivalent adjustment applied to SE profit.
    pub net_earnings_factor: Decimal,
    /// Deductible share of SE tax.
    pub se_deduction_factor: Decimal,

    // Tips / overtime deductions
    pub tips_deduction_cap: Decimal,
    pub overtime_deduction_cap: ByStatus<Decimal>,
    /// Income cliff above which the tips and overtime deductions vanish.
    pub deduction_phase_out_threshold: ByStatus<Decimal>,

    // Deductions
    pub standard_deduction: ByStatus<Decimal>,
    pub salt_cap: Decimal,

    // Ordinary income
    pub brackets: ByStatus<Vec<Bracket>>,

    // Long-term capital gains: flat 0% / 15% / 20% selected by where
    // federal taxable income falls relative to the two maxima.
    pub ltcg_zero_rate_max: ByStatus<Decimal>,
    pub ltcg_mid_rate_max: ByStatus<Decimal>,
    pub ltcg_mid_rate: Decimal,
    pub ltcg_top_rate: Decimal,

    // Surtaxes
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold: ByStatus<Decimal>,
    pub niit_rate: Decimal,
    pub niit_threshold: ByStatus<Decimal>,

    // Credits
    pub child_tax_credit_per_child: Decimal,
}

fn bracket(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Bracket {
    Bracket::new(lower, upper, rate)
}

impl FederalRules {
    /// 2025 federal parameters.
    pub fn year_2025() -> Self {
        Self {
            ss_wage_max: dec!(176100),
            ss_tax_rate: dec!(0.124),
            medicare_tax_rate: dec!(0.029),
            net_earnings_factor: dec!(0.9235),
            se_deduction_factor: dec!(0.50),

            tips_deduction_cap: dec!(25000),
            overtime_deduction_cap: ByStatus {
                single: dec!(12500),
                joint: dec!(25000),
            },
            deduction_phase_out_threshold: ByStatus {
                single: dec!(150000),
                joint: dec!(300000),
            },

            standard_deduction: ByStatus {
                single: dec!(15750),
                joint: dec!(31500),
            },
            salt_cap: dec!(40000),

            brackets: ByStatus {
                single: vec![
                    bracket(dec!(0), Some(dec!(11925)), dec!(0.10)),
                    bracket(dec!(11925), Some(dec!(48475)), dec!(0.12)),
                    bracket(dec!(48475), Some(dec!(103350)), dec!(0.22)),
                    bracket(dec!(103350), Some(dec!(197300)), dec!(0.24)),
                    bracket(dec!(197300), Some(dec!(250525)), dec!(0.32)),
                    bracket(dec!(250525), Some(dec!(626350)), dec!(0.35)),
                    bracket(dec!(626350), None, dec!(0.37)),
                ],
                joint: vec![
                    bracket(dec!(0), Some(dec!(23850)), dec!(0.10)),
                    bracket(dec!(23850), Some(dec!(96950)), dec!(0.12)),
                    bracket(dec!(96950), Some(dec!(206700)), dec!(0.22)),
                    bracket(dec!(206700), Some(dec!(394600)), dec!(0.24)),
                    bracket(dec!(394600), Some(dec!(501050)), dec!(0.32)),
                    bracket(dec!(501050), Some(dec!(751600)), dec!(0.35)),
                    bracket(dec!(751600), None, dec!(0.37)),
                ],
            },

            ltcg_zero_rate_max: ByStatus {
                single: dec!(48350),
                joint: dec!(96700),
            },
            ltcg_mid_rate_max: ByStatus {
                single: dec!(300025),
                joint: dec!(600050),
            },
            ltcg_mid_rate: dec!(0.15),
            ltcg_top_rate: dec!(0.20),

            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold: ByStatus {
                single: dec!(200000),
                joint: dec!(250000),
            },
            niit_rate: dec!(0.038),
            niit_threshold: ByStatus {
                single: dec!(200000),
                joint: dec!(250000),
            },

            child_tax_credit_per_child: dec!(2200),
        }
    }
}
