pub mod calculations;
pub mod models;
pub mod report;
pub mod rules;
pub mod session;

pub use calculations::compute;
pub use models::*;
pub use report::{ReportRow, breakdown, total_liability};
pub use rules::{FederalRules, us_states};
pub use session::{SessionError, SessionStore};
