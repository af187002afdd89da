use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_list: Option<SettingSource>,
	pub(crate) search_category: Option<SettingSource>,
	pub(crate) search_ordering: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
	pub(crate) ui_secret_placeholder: Option<SettingSource>,
	pub(crate) logging_level: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_list(&self) -> SettingSource {
		or_key(&self.search_list, "search.list")
	}

	pub(crate) fn source_for_category(&self) -> SettingSource {
		or_key(&self.search_category, "search.category")
	}

	pub(crate) fn source_for_ordering(&self) -> SettingSource {
		or_key(&self.search_ordering, "search.ordering")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.ui_theme, "ui.theme")
	}

	pub(crate) fn source_for_secret_placeholder(&self) -> SettingSource {
		or_key(&self.ui_secret_placeholder, "ui.secret_placeholder")
	}

	pub(crate) fn source_for_log_level(&self) -> SettingSource {
		or_key(&self.logging_level, "logging.level")
	}
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
