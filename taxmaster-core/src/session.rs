//! Scenario persistence seam. Storage adapters implement
//! [`SessionStore`]; the engine itself never touches the filesystem.

use thiserror::Error;
use tracing::warn;

use crate::models::TaxInputs;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no saved session")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed session data: {0}")]
    Malformed(String),
}

/// Saves and restores one scenario snapshot.
pub trait SessionStore {
    fn save(&self, inputs: &TaxInputs) -> Result<(), SessionError>;

    fn load(&self) -> Result<TaxInputs, SessionError>;

    /// Loads the saved scenario, falling back to the default (empty)
    /// scenario when nothing usable is stored. A missing session is
    /// normal on first run; anything else is logged and swallowed so a
    /// corrupt file never blocks a calculation.
    fn load_or_default(&self) -> TaxInputs {
        match self.load() {
            Ok(inputs) => inputs,
            Err(SessionError::NotFound) => TaxInputs::default(),
            Err(error) => {
                warn!(%error, "could not load saved session; starting fresh");
                TaxInputs::default()
            }
        }
    }
}
