//! JSON session persistence for tax scenarios.
//!
//! A session is a single JSON object keyed by field name. Every key is
//! optional: missing keys fall back to the defaults below, so files
//! written by older versions (or trimmed by hand) still load.
//!
//! | Key | Type | Default |
//! |--------------------------|--------|-----------------|
//! | `filing_status` | string | `"S"` (`"MFJ"` for joint) |
//! | `dependent_count` | int | `0` |
//! | `salary` | number | `0` |
//! | `self_employment_profit` | number | `0` |
//! | `qualified_tips` | number | `0` |
//! | `qualified_overtime` | number | `0` |
//! | `short_term_gains` | number | `0` |
//! | `long_term_gains` | number | `0` |
//! | `dividends` | number | `0` |
//! | `pretax_contributions` | number | `0` |
//! | `student_loan_interest` | number | `0` |
//! | `mortgage_interest` | number | `0` |
//! | `salt_paid` | number | `0` |
//! | `jurisdiction` | string | `""` (no state tax) |
//!
//! An unrecognised `filing_status` code is treated as missing (logged),
//! not as a load failure.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use taxmaster_core::{FilingStatus, SessionError, SessionStore, TaxInputs};

/// Wire layout of the session file. Kept separate from [`TaxInputs`] so
/// the on-disk contract (all keys optional) is explicit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionRecord {
    filing_status: Option<String>,
    dependent_count: Option<u32>,
    salary: Option<Decimal>,
    self_employment_profit: Option<Decimal>,
    qualified_tips: Option<Decimal>,
    qualified_overtime: Option<Decimal>,
    short_term_gains: Option<Decimal>,
    long_term_gains: Option<Decimal>,
    dividends: Option<Decimal>,
    pretax_contributions: Option<Decimal>,
    student_loan_interest: Option<Decimal>,
    mortgage_interest: Option<Decimal>,
    salt_paid: Option<Decimal>,
    jurisdiction: Option<String>,
}

impl SessionRecord {
    fn from_inputs(inputs: &TaxInputs) -> Self {
        Self {
            filing_status: Some(inputs.filing_status.as_str().to_string()),
            dependent_count: Some(inputs.dependent_count),
            salary: Some(inputs.salary),
            self_employment_profit: Some(inputs.self_employment_profit),
            qualified_tips: Some(inputs.qualified_tips),
            qualified_overtime: Some(inputs.qualified_overtime),
            short_term_gains: Some(inputs.short_term_gains),
            long_term_gains: Some(inputs.long_term_gains),
            dividends: Some(inputs.dividends),
            pretax_contributions: Some(inputs.pretax_contributions),
            student_loan_interest: Some(inputs.student_loan_interest),
            mortgage_interest: Some(inputs.mortgage_interest),
            salt_paid: Some(inputs.salt_paid),
            jurisdiction: Some(inputs.jurisdiction.clone()),
        }
    }

    /// Merges the record over the default scenario, field by field.
    fn into_inputs(self) -> TaxInputs {
        let defaults = TaxInputs::default();
        let filing_status = match self.filing_status {
            Some(code) => FilingStatus::parse(&code).unwrap_or_else(|| {
                warn!(%code, "unrecognised filing status in session; using default");
                defaults.filing_status
            }),
            None => defaults.filing_status,
        };

        TaxInputs {
            filing_status,
            dependent_count: self.dependent_count.unwrap_or(defaults.dependent_count),
            salary: self.salary.unwrap_or(defaults.salary),
            self_employment_profit: self
                .self_employment_profit
                .unwrap_or(defaults.self_employment_profit),
            qualified_tips: self.qualified_tips.unwrap_or(defaults.qualified_tips),
            qualified_overtime: self
                .qualified_overtime
                .unwrap_or(defaults.qualified_overtime),
            short_term_gains: self.short_term_gains.unwrap_or(defaults.short_term_gains),
            long_term_gains: self.long_term_gains.unwrap_or(defaults.long_term_gains),
            dividends: self.dividends.unwrap_or(defaults.dividends),
            pretax_contributions: self
                .pretax_contributions
                .unwrap_or(defaults.pretax_contributions),
            student_loan_interest: self
                .student_loan_interest
                .unwrap_or(defaults.student_loan_interest),
            mortgage_interest: self
                .mortgage_interest
                .unwrap_or(defaults.mortgage_interest),
            salt_paid: self.salt_paid.unwrap_or(defaults.salt_paid),
            jurisdiction: self.jurisdiction.unwrap_or(defaults.jurisdiction),
        }
    }
}

/// [`SessionStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonSessionStore {
    fn save(&self, inputs: &TaxInputs) -> Result<(), SessionError> {
        let record = SessionRecord::from_inputs(inputs);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SessionError::Io(e.to_string()))
    }

    fn load(&self) -> Result<TaxInputs, SessionError> {
        let json = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SessionError::NotFound
            } else {
                SessionError::Io(e.to_string())
            }
        })?;
        let record: SessionRecord =
            serde_json::from_str(&json).map_err(|e| SessionError::Malformed(e.to_string()))?;
        Ok(record.into_inputs())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    /// A session file path unique to this test process and call site.
    fn temp_store() -> JsonSessionStore {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "taxmaster-session-test-{}-{n}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonSessionStore::new(path)
    }

    fn sample_inputs() -> TaxInputs {
        TaxInputs {
            filing_status: FilingStatus::MarriedFilingJointly,
            dependent_count: 2,
            salary: dec!(120000),
            self_employment_profit: dec!(15000.50),
            qualified_tips: dec!(3000),
            long_term_gains: dec!(8000),
            salt_paid: dec!(12000),
            jurisdiction: "California".to_string(),
            ..TaxInputs::default()
        }
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let store = temp_store();
        let inputs = sample_inputs();

        store.save(&inputs).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, inputs);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn round_trip_preserves_the_computed_result() {
        use taxmaster_core::{FederalRules, compute, us_states};

        let store = temp_store();
        let inputs = sample_inputs();
        let federal = FederalRules::year_2025();
        let states = us_states();

        store.save(&inputs).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(
            compute(&loaded, &federal, &states),
            compute(&inputs, &federal, &states)
        );
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn missing_keys_default_per_field() {
        let store = temp_store();
        fs::write(
            store.path(),
            r#"{"salary": "55000", "jurisdiction": "Ohio"}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();

        assert_eq!(loaded.salary, dec!(55000));
        assert_eq!(loaded.jurisdiction, "Ohio");
        assert_eq!(loaded.filing_status, FilingStatus::Single);
        assert_eq!(loaded.dependent_count, 0);
        assert_eq!(loaded.qualified_tips, dec!(0));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn empty_object_loads_the_default_scenario() {
        let store = temp_store();
        fs::write(store.path(), "{}").unwrap();

        let loaded = store.load().unwrap();

        assert_eq!(loaded, TaxInputs::default());
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn unknown_filing_status_code_falls_back_to_default() {
        let store = temp_store();
        fs::write(
            store.path(),
            r#"{"filing_status": "HOH", "salary": "70000"}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();

        assert_eq!(loaded.filing_status, FilingStatus::Single);
        assert_eq!(loaded.salary, dec!(70000));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn missing_file_reports_not_found() {
        let store = temp_store();

        assert!(matches!(store.load(), Err(SessionError::NotFound)));
    }

    #[test]
    fn corrupt_file_reports_malformed_and_recovers_to_default() {
        let store = temp_store();
        fs::write(store.path(), "not json at all {").unwrap();

        assert!(matches!(store.load(), Err(SessionError::Malformed(_))));
        assert_eq!(store.load_or_default(), TaxInputs::default());
        let _ = fs::remove_file(store.path());
    }
}
