//! Core state and behavior of the memo search screen.
//!
//! The [`App`] type aggregates the query input, the displayed memo list and
//! the request bookkeeping. Supporting modules partition the implementation:
//! actions (key handling), rendering, search coordination, favorite toggling,
//! results state and transient status messages.

mod actions;
mod favorites;
mod render;
mod results;
mod search;
mod state;
mod status;

pub use results::ResultsVisibility;
pub(crate) use search::SearchRuntime;
pub use state::{App, Focus};
