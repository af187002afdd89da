//! Displayed memo list and its visibility.

mod state;

pub(crate) use state::ResultsState;
pub use state::ResultsVisibility;
