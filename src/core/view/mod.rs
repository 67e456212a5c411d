pub mod limits;
pub mod state;

pub use limits::{ViewLimits, ViewLimitsError};
pub use state::ViewState;
