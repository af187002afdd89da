use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{ListArg, OrderingArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `memo-search` binary.
#[derive(Parser, Debug)]
#[command(
	name = "memo-search",
	version,
	long_version = long_version(),
	about = "Search your memos by title or text from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MEMO_SEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "db",
		value_name = "PATH",
		help = "Memo database to open (default: memos.db in the data directory)"
	)]
	pub(crate) database: Option<PathBuf>,
	#[arg(
		short = 'L',
		long,
		value_enum,
		help = "Memo list the screen is opened from (default: all)"
	)]
	pub(crate) list: Option<ListArg>,
	#[arg(
		short = 'C',
		long,
		value_name = "ID",
		allow_negative_numbers = true,
		help = "Category id for the added list (default: none)"
	)]
	pub(crate) category: Option<i64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search once for QUERY when the screen opens (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_enum,
		help = "How overlapping search responses are reconciled (default: latest_query)"
	)]
	pub(crate) ordering: Option<OrderingArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the screen title (default: Search memos)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'i',
		long = "import",
		value_name = "FILE",
		help = "Import a JSON array of memos before opening the screen (default: none)"
	)]
	pub(crate) import: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the navigation result"
	)]
	pub(crate) output: OutputFormat,
}
