use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod search;
mod storage;
mod ui;

use logging::LoggingSection;
use search::SearchSection;
use storage::StorageSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	storage: StorageSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.storage.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_list: detect_source(
				cli.list.is_some(),
				self.search.list.is_some(),
				"MEMO_SEARCH__SEARCH__LIST",
				"--list",
				"search.list",
			),
			search_category: detect_source(
				cli.category.is_some(),
				self.search.category.is_some(),
				"MEMO_SEARCH__SEARCH__CATEGORY",
				"--category",
				"search.category",
			),
			search_ordering: detect_source(
				cli.ordering.is_some(),
				self.search.ordering.is_some(),
				"MEMO_SEARCH__SEARCH__ORDERING",
				"--ordering",
				"search.ordering",
			),
			ui_theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MEMO_SEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			ui_secret_placeholder: detect_config_source(
				self.ui.secret_placeholder.is_some(),
				"MEMO_SEARCH__UI__SECRET_PLACEHOLDER",
				"ui.secret_placeholder",
			),
			logging_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"MEMO_SEARCH__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let database = self.storage.resolve()?;
		let search = self.search.resolve(&sources).map_err(Error::new)?;
		let ui = self.ui.finalize();
		let logging = self.logging.resolve();

		let config = ResolvedConfig {
			database,
			list: search.list,
			ordering: search.ordering,
			theme: ui.theme,
			labels: ui.labels,
			initial_query: ui.initial_query,
			logging,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	detect_config_source(true, env_var, key)
}

/// Source of a key that has no CLI flag.
fn detect_config_source(
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
