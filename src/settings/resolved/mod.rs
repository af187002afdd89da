use std::path::PathBuf;

use memo_search_core::{MemoList, ResultOrdering};
use memo_search_tui::UiLabels;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub database: PathBuf,
	pub list: MemoList,
	pub ordering: ResultOrdering,
	pub theme: Option<String>,
	pub labels: UiLabels,
	pub initial_query: String,
	pub logging: LoggingConfig,
}

/// Where log events go and which ones are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: String,
	/// `None` when no log location could be determined; logging is disabled.
	pub file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
