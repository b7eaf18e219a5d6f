//! Worksheet calculations, one module per liability component: the
//! self-employment worksheet, the federal worksheet and the state
//! worksheet. [`crate::compute`] composes them in order.

pub mod federal;
pub mod self_emp;
pub mod state;

pub use federal::{FederalWorksheet, FederalWorksheetResult};
pub use self_emp::{SeWorksheet, SeWorksheetResult};
pub use state::{StateWorksheet, StateWorksheetResult};
