use std::path::PathBuf;

use clap::Parser;
use memo_search_core::{MemoList, ResultOrdering};

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::resolved::SettingSource;

fn parse(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("memo-search").chain(args.iter().copied()))
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = parse(&[
		"--db",
		"/tmp/cli.db",
		"--list",
		"added",
		"--category",
		"9",
		"--ordering",
		"last_response",
		"--theme",
		"light",
		"--title",
		"Mine",
		"--query",
		"trip",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.search.list = Some("favorites".into());
	config.ui.title = Some("From file".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.storage.database, Some(PathBuf::from("/tmp/cli.db")));
	assert_eq!(config.search.list.as_deref(), Some("added"));
	assert_eq!(config.search.category, Some(9));
	assert_eq!(config.search.ordering.as_deref(), Some("last_response"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.title.as_deref(), Some("Mine"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("trip"));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn resolve_builds_the_category_list() {
	let cli = parse(&["--db", "/tmp/cli.db", "--list", "category", "--category", "4"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.list, MemoList::Category(Some(4)));
	assert_eq!(resolved.list.filter().category_id, Some(4));
	assert_eq!(resolved.ordering, ResultOrdering::LatestQuery);
}

#[test]
fn added_list_without_category_uses_the_missing_marker() {
	let cli = parse(&["--db", "/tmp/cli.db", "--list", "added"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.list, MemoList::Category(None));
	assert_eq!(resolved.list.filter().category_id, Some(-1));
}

#[test]
fn category_outside_the_added_list_is_rejected() {
	let cli = parse(&["--db", "/tmp/cli.db", "--list", "favorites", "--category", "2"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("search.category"));
	assert!(message.contains("CLI flag `--category`"));
}

#[test]
fn unknown_list_from_config_names_its_origin() {
	let cli = parse(&["--db", "/tmp/cli.db"]);
	let mut config = RawConfig::default();
	config.search.list = Some("archived".into());

	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("configuration key `search.list`"));
}

#[test]
fn ui_labels_fall_back_to_defaults() {
	let cli = parse(&["--db", "/tmp/cli.db"]);
	let mut config = RawConfig::default();
	config.ui.no_results = Some("Nothing here".into());

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(resolved.labels.no_results, "Nothing here");
	assert_eq!(resolved.labels.secret_placeholder, "This is a secret memo");
	assert_eq!(resolved.logging.level, "info");
}

#[test]
fn cli_flags_are_reported_as_the_source() {
	let cli = parse(&["--ordering", "latest_query"]);
	let source = super::detect_source(
		cli.ordering.is_some(),
		true,
		"MEMO_SEARCH__SEARCH__ORDERING",
		"--ordering",
		"search.ordering",
	);
	assert_eq!(source, Some(SettingSource::CliFlag("--ordering")));
	assert_eq!(
		super::detect_source(false, false, "MEMO_SEARCH__SEARCH__ORDERING", "--ordering", "search.ordering"),
		None
	);
}
