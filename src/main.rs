mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use std::path::Path;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for theme in memo_search_tui::descriptors() {
			let mut line = theme.name.clone();
			if theme.is_default {
				line.push_str(" (default)");
			}
			if !theme.aliases.is_empty() {
				line.push_str(&format!(" [aliases: {}]", theme.aliases.join(", ")));
			}
			println!("{line}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let _log_guard = logging::initialize(&resolved.logging)?;

	run_search(cli.output, resolved, cli.import.as_deref())
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig, import: Option<&Path>) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings, import)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
