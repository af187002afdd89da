use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use memo_search_core::{MemoList, ResultOrdering};
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		CliArgs::parse_from(std::iter::once("memo-search").chain(args.iter().copied()))
	}

	#[test]
	fn config_file_values_are_resolved() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("memo.toml");
		fs::write(
			&path,
			r#"
[storage]
database = "/tmp/memos-test.db"

[search]
list = "added"
category = 5
ordering = "last_response"

[ui]
title = "Trip notes"
secret_placeholder = "hidden"
"#,
		)
		.unwrap();

		let path = path.to_string_lossy().into_owned();
		let resolved = load(&cli(&["--no-config", "--config", &path])).expect("loads");

		assert_eq!(resolved.database.to_string_lossy(), "/tmp/memos-test.db");
		assert_eq!(resolved.list, MemoList::Category(Some(5)));
		assert_eq!(resolved.ordering, ResultOrdering::LastResponse);
		assert_eq!(resolved.labels.title, "Trip notes");
		assert_eq!(resolved.labels.secret_placeholder, "hidden");
	}

	#[test]
	fn cli_flags_override_config_files() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("memo.toml");
		fs::write(&path, "[search]\nlist = \"all\"\n\n[ui]\ntitle = \"From file\"\n").unwrap();

		let path = path.to_string_lossy().into_owned();
		let resolved = load(&cli(&[
			"--no-config",
			"--config",
			&path,
			"--db",
			"/tmp/memos-test.db",
			"--list",
			"favorites",
			"--title",
			"From flag",
		]))
		.expect("loads");

		assert_eq!(resolved.list, MemoList::Favorites);
		assert_eq!(resolved.labels.title, "From flag");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml").to_string_lossy().into_owned();
		assert!(load(&cli(&["--no-config", "--config", &path])).is_err());
	}

	#[test]
	fn invalid_ordering_in_config_names_the_key() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("memo.toml");
		fs::write(&path, "[search]\nordering = \"fastest\"\n").unwrap();

		let path = path.to_string_lossy().into_owned();
		let err = load(&cli(&["--no-config", "--config", &path])).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("search.ordering"));
		assert!(message.contains("fastest"));
	}
}
