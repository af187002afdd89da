//! Resolve configuration and data directories for `memo-search`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "memo-search";
const APPLICATION: &str = "memo-search";

const CONFIG_DIR_ENV: &str = "MEMO_SEARCH_CONFIG_DIR";
const DATA_DIR_ENV: &str = "MEMO_SEARCH_DATA_DIR";

/// File name of the default memo database inside the data directory.
pub const DATABASE_FILE: &str = "memos.db";
/// File name of the default log file inside the data directory.
pub const LOG_FILE: &str = "memo-search.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for memo-search"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory that stores the memo database and logs.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default location of the memo database.
pub fn default_database_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(DATABASE_FILE))
}

/// Default location of the log file.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_paths_live_in_the_data_dir() {
		let Ok(data) = get_data_dir() else {
			return;
		};
		assert_eq!(default_database_path().unwrap(), data.join(DATABASE_FILE));
		assert_eq!(default_log_path().unwrap(), data.join(LOG_FILE));
	}
}
