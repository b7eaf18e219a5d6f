//! Report rendering: turns the engine's breakdown rows into a
//! spreadsheet (CSV) sheet and a fixed two-column text document.
//! Display rounding happens here and nowhere else.

pub mod currency;
pub mod document;
pub mod sheet;

use thiserror::Error;

pub use currency::{format_usd, round_half_up};
pub use document::{render_document, write_document};
pub use sheet::write_sheet;

/// Errors surfaced while writing an export. Not handled specially
/// anywhere in this workspace; callers decide what a failed export
/// means.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
