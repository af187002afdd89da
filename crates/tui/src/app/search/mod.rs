//! Search coordination and runtime management.
//!
//! This module handles communication with the background memo worker,
//! request sequencing, and response processing.

mod coordination;
mod runtime;

pub(crate) use runtime::SearchRuntime;
