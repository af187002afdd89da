//! Interactive terminal search screen for `memo-search`.
//!
//! This crate contains the full screen: state and key handling, search
//! coordination with the background memo worker, inline favorite toggling,
//! rendering, the theme catalog, and the event loop that hands a
//! [`NavigationRequest`] back to the host.

mod app;
pub mod components;
mod config;
pub mod input;
mod navigation;
mod runtime;
pub mod style;
#[cfg(test)]
mod test_support;

pub use app::{App, Focus, ResultsVisibility};
pub use config::UiLabels;
pub use navigation::{NavigationRequest, ScreenArgs, ScreenName};
pub use runtime::run;

pub use crate::components::rows::MemoRow;
pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, ThemeDescriptor, by_name, default_theme, descriptors, names};
