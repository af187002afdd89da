use std::path::PathBuf;

use memo_search_core::app_dirs;
use serde::Deserialize;

use super::super::resolved::LoggingConfig;
use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	/// An unresolvable default log path disables file logging instead of
	/// failing startup.
	pub(super) fn resolve(self) -> LoggingConfig {
		LoggingConfig {
			level: self.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			file: self.file.or_else(|| app_dirs::default_log_path().ok()),
		}
	}
}
