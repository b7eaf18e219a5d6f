//! Breakdown report derivation: the ordered `(label, amount)` rows that
//! export adapters render as a document or spreadsheet sheet. No tax
//! arithmetic happens here beyond reassembling `TaxResult` fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{TaxInputs, TaxResult};

/// One line of the breakdown report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub amount: Decimal,
}

impl ReportRow {
    fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Combined federal and state liability.
pub fn total_liability(result: &TaxResult) -> Decimal {
    result.federal_liability + result.state_liability
}

/// Derives the ordered breakdown rows for one computed scenario.
pub fn breakdown(inputs: &TaxInputs, result: &TaxResult) -> Vec<ReportRow> {
    let state_label = if inputs.jurisdiction.is_empty() {
        "State Tax".to_string()
    } else {
        format!("{} State Tax", inputs.jurisdiction)
    };

    vec![
        ReportRow::new("Adjusted Gross Income (AGI)", result.agi),
        ReportRow::new("Federal Taxable Income", result.federal_taxable_income),
        ReportRow::new("Self-Employment Tax", result.self_employment_tax),
        ReportRow::new("Ordinary Federal Income Tax", result.ordinary_tax),
        ReportRow::new("Long-Term Gains Tax (0-20%)", result.lt_gains_tax),
        ReportRow::new(
            "Additional Medicare Tax (0.9%)",
            result.additional_medicare_tax,
        ),
        ReportRow::new(
            "Net Investment Income Tax (3.8%)",
            result.net_investment_income_tax,
        ),
        ReportRow::new("Child Tax Credit (Reduction)", result.child_tax_credit),
        ReportRow::new(state_label, result.state_liability),
        ReportRow::new("Total Tax Liability", total_liability(result)),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::rules::{FederalRules, us_states};

    fn computed(inputs: &TaxInputs) -> TaxResult {
        crate::compute(inputs, &FederalRules::year_2025(), &us_states())
    }

    #[test]
    fn breakdown_has_ten_rows_in_fixed_order() {
        let inputs = TaxInputs {
            salary: dec!(80000),
            jurisdiction: "Texas".to_string(),
            ..TaxInputs::default()
        };

        let rows = breakdown(&inputs, &computed(&inputs));

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Adjusted Gross Income (AGI)",
                "Federal Taxable Income",
                "Self-Employment Tax",
                "Ordinary Federal Income Tax",
                "Long-Term Gains Tax (0-20%)",
                "Additional Medicare Tax (0.9%)",
                "Net Investment Income Tax (3.8%)",
                "Child Tax Credit (Reduction)",
                "Texas State Tax",
                "Total Tax Liability",
            ]
        );
    }

    #[test]
    fn ordinary_row_carries_the_bracket_tax() {
        let inputs = TaxInputs {
            salary: dec!(80000),
            jurisdiction: "Texas".to_string(),
            ..TaxInputs::default()
        };

        let rows = breakdown(&inputs, &computed(&inputs));

        // Single, 80,000 salary: taxable 64,250 across three brackets.
        assert_eq!(rows[3].amount, dec!(9049));
    }

    #[test]
    fn ordinary_row_survives_a_credit_that_floors_the_liability() {
        let inputs = TaxInputs {
            salary: dec!(20000),
            dependent_count: 6,
            ..TaxInputs::default()
        };
        let result = computed(&inputs);
        assert_eq!(result.federal_liability, Decimal::ZERO);

        let rows = breakdown(&inputs, &result);

        // Taxable 4,250 × 10%; the floored liability does not erase it.
        assert_eq!(rows[3].amount, dec!(425));
    }

    #[test]
    fn total_row_sums_federal_and_state() {
        let inputs = TaxInputs {
            salary: dec!(80000),
            jurisdiction: "Colorado".to_string(),
            ..TaxInputs::default()
        };
        let result = computed(&inputs);

        let rows = breakdown(&inputs, &result);

        assert_eq!(
            rows.last().unwrap().amount,
            result.federal_liability + result.state_liability
        );
    }

    #[test]
    fn missing_jurisdiction_gets_a_generic_state_label() {
        let inputs = TaxInputs::default();

        let rows = breakdown(&inputs, &computed(&inputs));

        assert_eq!(rows[8].label, "State Tax");
        assert_eq!(rows[8].amount, Decimal::ZERO);
    }
}
