//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the search screen; [`StyleConfig`]
//! is the container the screen holds so further styling knobs can sit next
//! to the theme.

/// Theme definitions, the built-in catalog and name lookup.
pub mod theme;

pub use theme::{Theme, ThemeDescriptor, ThemeRegistration, by_name, default_theme, descriptors, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
