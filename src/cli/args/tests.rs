use clap::{CommandFactory, Parser};

use super::options::{ListArg, OrderingArg};
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["memo-search"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.list.is_none());
	assert!(parsed.import.is_none());
}

#[test]
fn category_is_an_alias_for_the_added_list() {
	let parsed = CliArgs::try_parse_from(["memo-search", "--list", "category", "--category", "7"])
		.expect("parses");
	assert_eq!(parsed.list, Some(ListArg::Added));
	assert_eq!(parsed.category, Some(7));
}

#[test]
fn ordering_accepts_snake_and_kebab_case() {
	let snake = CliArgs::try_parse_from(["memo-search", "--ordering", "last_response"]).expect("parses");
	let kebab = CliArgs::try_parse_from(["memo-search", "--ordering", "last-response"]).expect("parses");
	assert_eq!(snake.ordering, Some(OrderingArg::LastResponse));
	assert_eq!(kebab.ordering, Some(OrderingArg::LastResponse));
}

#[test]
fn config_flag_can_be_repeated() {
	let parsed = CliArgs::try_parse_from(["memo-search", "-c", "a.toml", "--config", "b.toml"])
		.expect("parses");
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn unknown_list_is_rejected() {
	assert!(CliArgs::try_parse_from(["memo-search", "--list", "archived"]).is_err());
}
