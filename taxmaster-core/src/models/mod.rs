mod bracket;
mod filing_status;
mod inputs;
mod jurisdiction;
mod result;

pub use bracket::Bracket;
pub use filing_status::FilingStatus;
pub use inputs::TaxInputs;
pub use jurisdiction::{JurisdictionRule, JurisdictionTable};
pub use result::TaxResult;
