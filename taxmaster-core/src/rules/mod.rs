//! Static rule data for the 2025 tax year: federal parameters and the
//! per-state jurisdiction table. Loaded once, read-only for the process
//! lifetime.

mod federal;
mod states;

pub use federal::{ByStatus, FederalRules};
pub use states::us_states;
