use memo_search_tui::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) no_results: Option<String>,
	pub(super) secret_placeholder: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.title {
			labels.title = title;
		}
		if let Some(label) = self.filter_label {
			labels.filter_label = label;
		}
		if let Some(message) = self.no_results {
			labels.no_results = message;
		}
		if let Some(placeholder) = self.secret_placeholder {
			labels.secret_placeholder = placeholder;
		}

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme,
		}
	}
}
