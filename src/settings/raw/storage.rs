use std::path::PathBuf;

use anyhow::Result;
use memo_search_core::app_dirs;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where memos are stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) database: Option<PathBuf>,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.database.clone() {
			self.database = Some(path);
		}
	}

	pub(super) fn resolve(self) -> Result<PathBuf> {
		match self.database {
			Some(path) => Ok(path),
			None => app_dirs::default_database_path(),
		}
	}
}
