use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::Bracket;

/// How a state taxes income. Each kind carries exactly the fields it
/// needs; a state either levies no income tax, a flat rate, or a
/// progressive schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JurisdictionRule {
    None,
    Flat {
        standard_deduction: Decimal,
        rate: Decimal,
    },
    Progressive {
        standard_deduction: Decimal,
        brackets: Vec<Bracket>,
    },
}

impl JurisdictionRule {
    pub fn standard_deduction(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Flat {
                standard_deduction, ..
            }
            | Self::Progressive {
                standard_deduction, ..
            } => *standard_deduction,
        }
    }
}

/// Read-only mapping from state name to its rule, loaded once for the
/// process lifetime. Lookup never fails: names outside the table resolve
/// to [`JurisdictionRule::None`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JurisdictionTable {
    rules: BTreeMap<String, JurisdictionRule>,
}

static NO_TAX: JurisdictionRule = JurisdictionRule::None;

impl JurisdictionTable {
    pub fn new(rules: BTreeMap<String, JurisdictionRule>) -> Self {
        Self { rules }
    }

    /// Looks up a state by name. Unknown names (including the empty
    /// default) fall back to the no-tax rule.
    pub fn rule(&self, name: &str) -> &JurisdictionRule {
        match self.rules.get(name) {
            Some(rule) => rule,
            None => {
                if !name.is_empty() {
                    warn!(state = %name, "unknown jurisdiction; treating as no income tax");
                }
                &NO_TAX
            }
        }
    }

    /// State names in sorted order, for pickers and `--list-states`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
