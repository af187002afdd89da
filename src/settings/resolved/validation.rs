use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.labels.secret_placeholder.trim().is_empty() {
		return Err(ConfigError::invalid(
			"ui.secret_placeholder",
			config.labels.secret_placeholder.clone(),
			sources.source_for_secret_placeholder(),
			"must not be blank",
		));
	}

	if LevelFilter::from_str(config.logging.level.trim()).is_err() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.logging.level.clone(),
			sources.source_for_log_level(),
			"expected one of off, error, warn, info, debug, trace",
		));
	}

	if let Some(theme) = &config.theme
		&& memo_search_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", memo_search_tui::names().join(", ")),
		));
	}

	Ok(())
}
