use ratatui::style::{Color, Style};

/// A theme containing styles for the elements of the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for the title line and borders.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the query prompt and typed text.
	pub prompt: Style,
	/// Style for the "no results" message and input placeholder.
	pub empty: Style,
	/// Style for secondary text: secret placeholders, dividers, hints.
	pub muted: Style,
	/// Style for the favorite star.
	pub favorite: Style,
	/// Style for transient error messages.
	pub error: Style,
}

impl Theme {
	/// Foreground used for borders and the scrollbar.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	#[must_use]
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	/// The name of the theme.
	pub name: String,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// Whether this theme is used when none is configured.
	pub is_default: bool,
}
