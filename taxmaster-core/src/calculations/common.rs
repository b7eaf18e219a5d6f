//! Shared helpers for the worksheet calculations.

use rust_decimal::Decimal;

use crate::models::Bracket;

/// Clamps a value at zero. Every intermediate floor in the engine goes
/// through this rather than raising on negative input.
pub fn floor_zero(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Applies a marginal bracket schedule to `taxable`.
///
/// For each bracket in ascending order, tax accrues on the portion of
/// taxable income falling within `[lower, min(taxable, upper))`,
/// stopping once taxable income is exhausted. Zero or negative taxable
/// income yields zero tax.
///
/// Splitting any bracket into two sub-brackets at the same rate leaves
/// the result unchanged.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxmaster_core::models::Bracket;
/// use taxmaster_core::calculations::marginal_tax;
///
/// let schedule = [
///     Bracket::new(dec!(0), Some(dec!(10000)), dec!(0.10)),
///     Bracket::new(dec!(10000), None, dec!(0.20)),
/// ];
///
/// // 10000 × 10% + 5000 × 20%
/// assert_eq!(marginal_tax(dec!(15000), &schedule), dec!(3000));
/// ```
pub fn marginal_tax(taxable: Decimal, brackets: &[Bracket]) -> Decimal {
    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        if taxable <= bracket.lower {
            break;
        }
        let top = match bracket.upper {
            Some(upper) => taxable.min(upper),
            None => taxable,
        };
        tax += (top - bracket.lower) * bracket.rate;
    }
    tax
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn schedule() -> Vec<Bracket> {
        vec![
            Bracket::new(dec!(0), Some(dec!(1000)), dec!(0.10)),
            Bracket::new(dec!(1000), Some(dec!(5000)), dec!(0.20)),
            Bracket::new(dec!(5000), None, dec!(0.30)),
        ]
    }

    #[test]
    fn floor_zero_passes_positive_values() {
        assert_eq!(floor_zero(dec!(12.34)), dec!(12.34));
    }

    #[test]
    fn floor_zero_clamps_negative_values() {
        assert_eq!(floor_zero(dec!(-12.34)), Decimal::ZERO);
    }

    #[test]
    fn tax_is_zero_at_or_below_zero_income() {
        assert_eq!(marginal_tax(dec!(0), &schedule()), Decimal::ZERO);
        assert_eq!(marginal_tax(dec!(-100), &schedule()), Decimal::ZERO);
    }

    #[test]
    fn tax_within_first_bracket() {
        assert_eq!(marginal_tax(dec!(500), &schedule()), dec!(50));
    }

    #[test]
    fn tax_at_exact_bracket_boundary() {
        // 1000 × 10%; the second bracket contributes nothing yet.
        assert_eq!(marginal_tax(dec!(1000), &schedule()), dec!(100));
    }

    #[test]
    fn tax_spans_all_brackets() {
        // 1000 × 10% + 4000 × 20% + 5000 × 30%
        assert_eq!(marginal_tax(dec!(10000), &schedule()), dec!(2400));
    }

    #[test]
    fn splitting_a_bracket_at_the_same_rate_changes_nothing() {
        let split = vec![
            Bracket::new(dec!(0), Some(dec!(1000)), dec!(0.10)),
            Bracket::new(dec!(1000), Some(dec!(3000)), dec!(0.20)),
            Bracket::new(dec!(3000), Some(dec!(5000)), dec!(0.20)),
            Bracket::new(dec!(5000), None, dec!(0.30)),
        ];

        for income in [dec!(0), dec!(999), dec!(2500), dec!(3000), dec!(80000)] {
            assert_eq!(
                marginal_tax(income, &split),
                marginal_tax(income, &schedule()),
                "income {income}"
            );
        }
    }

    #[test]
    fn fractional_income_is_not_rounded() {
        // 500.505 × 10%
        assert_eq!(marginal_tax(dec!(500.505), &schedule()), dec!(50.0505));
    }
}
