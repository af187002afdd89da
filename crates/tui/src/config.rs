/// Textual configuration used when rendering the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title shown on the header line.
	pub title: String,
	/// Placeholder displayed inside the empty query input.
	pub filter_label: String,
	/// Message shown in place of the list when a search matched nothing.
	pub no_results: String,
	/// Text rendered instead of the title of a secret memo.
	pub secret_placeholder: String,
	/// Key hints shown on the status line when no message is pending.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Search memos".to_string(),
			filter_label: "Search by title or text".to_string(),
			no_results: "No search results".to_string(),
			secret_placeholder: "This is a secret memo".to_string(),
			hint: "enter search · ↓ results · space favorite · esc back".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the header title.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Replace the text shown for secret memos.
	#[must_use]
	pub fn with_secret_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.secret_placeholder = placeholder.into();
		self
	}
}
