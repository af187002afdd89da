use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Database: {}", config.database.display()),
		format!("  List: {} ({})", config.list.mode_str(), config.list.label()),
		format!("  Result ordering: {}", config.ordering),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the default theme)")
		),
		format!("  Title: {}", config.labels.title),
		format!("  Filter label: {}", config.labels.filter_label),
		format!("  No results message: {}", config.labels.no_results),
		format!("  Secret placeholder: {}", config.labels.secret_placeholder),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Log level: {}", config.logging.level));
	match &config.logging.file {
		Some(path) => lines.push(format!("  Log file: {}", path.display())),
		None => lines.push("  Log file: (disabled)".to_string()),
	}
	lines
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use memo_search_core::{MemoList, ResultOrdering};
	use memo_search_tui::UiLabels;

	use super::super::LoggingConfig;
	use super::*;

	#[test]
	fn summary_describes_list_and_ordering() {
		let config = ResolvedConfig {
			database: PathBuf::from("/tmp/memos.db"),
			list: MemoList::Category(Some(3)),
			ordering: ResultOrdering::LastResponse,
			theme: Some("light".into()),
			labels: UiLabels::default(),
			initial_query: "trip".into(),
			logging: LoggingConfig {
				level: "debug".into(),
				file: None,
			},
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  List: added (Category 3)".to_string()));
		assert!(lines.contains(&"  Result ordering: last_response".to_string()));
		assert!(lines.contains(&"  Initial query: trip".to_string()));
		assert!(lines.contains(&"  Log file: (disabled)".to_string()));
		print_summary(&config);
	}
}
