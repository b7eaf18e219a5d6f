//! Currency display formatting.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Rounds to two decimal places, half-up (midpoint away from zero), the
/// standard financial convention.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a plain two-decimal number, e.g. `1234.56`.
/// Suitable for spreadsheet cells.
pub fn format_plain(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative();
    let (dollars, cents) = split_dollars_cents(rounded.abs());
    let sign = if negative && (dollars > 0 || cents > 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}{dollars}.{cents:02}")
}

/// Formats an amount as US currency with thousands separators,
/// e.g. `$1,234,567.89`. Negative amounts render as `-$…`.
pub fn format_usd(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative();
    let (dollars, cents) = split_dollars_cents(rounded.abs());
    let sign = if negative && (dollars > 0 || cents > 0) {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents:02}", group_thousands(dollars))
}

/// Splits a non-negative, already-rounded amount into whole dollars and
/// a 0–99 cents remainder.
fn split_dollars_cents(abs: Decimal) -> (u128, u32) {
    let dollars = abs.trunc();
    let cents = ((abs - dollars) * Decimal::from(100)).round();
    (
        dollars.to_u128().unwrap_or(0),
        cents.to_u32().unwrap_or(0),
    )
}

fn group_thousands(dollars: u128) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
