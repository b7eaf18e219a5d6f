use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal bracket: income in `[lower, upper)` is taxed at `rate`.
///
/// `upper` of `None` means the bracket is unbounded. A schedule is an
/// ascending, contiguous slice of brackets starting at zero with an
/// unbounded final bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl Bracket {
    pub fn new(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Self {
        Self { lower, upper, rate }
    }
}
