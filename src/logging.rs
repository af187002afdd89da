//! File logging for the binary. The terminal belongs to the search screen, so
//! events are written to a log file instead of stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::LoggingConfig;

/// Environment variable holding a full `EnvFilter` directive that replaces the
/// configured level.
pub(crate) const LOG_ENV: &str = "MEMO_SEARCH_LOG";

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program so buffered events are flushed on exit.
pub(crate) fn initialize(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
	let Some(path) = &config.file else {
		return Ok(None);
	};

	let (directory, file_name) = split_log_path(path)?;
	fs::create_dir_all(directory)
		.with_context(|| format!("failed to create log directory {}", directory.display()))?;

	let appender = tracing_appender::rolling::never(directory, file_name);
	let (writer, guard) = tracing_appender::non_blocking(appender);

	tracing_subscriber::registry()
		.with(filter_for(&config.level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(writer)
				.with_ansi(false)
				.with_target(true),
		)
		.try_init()
		.context("failed to install the log subscriber")?;

	Ok(Some(guard))
}

fn filter_for(level: &str) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

fn default_directive(level: &str) -> String {
	let level = level.trim().to_ascii_lowercase();
	format!("warn,memo_search={level},memo_search_core={level},memo_search_tui={level}")
}

fn split_log_path(path: &Path) -> Result<(&Path, &Path)> {
	let file_name = path
		.file_name()
		.map(Path::new)
		.with_context(|| format!("log file path {} has no file name", path.display()))?;
	let directory = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	Ok((directory, file_name))
}
