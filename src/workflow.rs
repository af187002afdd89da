use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use memo_search_core::{Memo, MemoRepository, SqliteMemoRepository};
use memo_search_tui::{App, NavigationRequest, default_theme};
use tracing::{info, warn};

use crate::settings::ResolvedConfig;

/// What the search screen asked the host to do, plus the memo it points at.
#[derive(Debug, Clone)]
pub(crate) struct ScreenOutcome {
	pub(crate) request: NavigationRequest,
	pub(crate) memo: Option<Memo>,
	pub(crate) secret_placeholder: String,
}

/// Coordinates building and running the interactive search screen.
pub(crate) struct SearchWorkflow {
	repository: Arc<SqliteMemoRepository>,
	app: App<'static>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig, import: Option<&Path>) -> Result<Self> {
		let repository = Arc::new(
			SqliteMemoRepository::open(&config.database).with_context(|| {
				format!("failed to open memo database {}", config.database.display())
			})?,
		);

		if let Some(path) = import {
			let count = repository
				.import_json(path)
				.with_context(|| format!("failed to import memos from {}", path.display()))?;
			info!(count, path = %path.display(), "imported memos");
		}

		let app = ScreenFactory::build(Arc::clone(&repository) as Arc<dyn MemoRepository>, config);
		Ok(Self { repository, app })
	}

	pub(crate) fn run(mut self) -> Result<ScreenOutcome> {
		let request = self.app.run()?;
		let secret_placeholder = self.app.labels().secret_placeholder.clone();
		drop(self.app);

		let memo = match request.memo_id() {
			Some(memo_id) => self.repository.memo(memo_id)?,
			None => None,
		};

		Ok(ScreenOutcome {
			request,
			memo,
			secret_placeholder,
		})
	}
}

/// Helper for translating resolved configuration into a configured [`App`].
struct ScreenFactory;

impl ScreenFactory {
	fn build(repository: Arc<dyn MemoRepository>, config: ResolvedConfig) -> App<'static> {
		let ResolvedConfig {
			list,
			ordering,
			theme,
			labels,
			initial_query,
			..
		} = config;

		let mut app = App::with_ordering(repository, list, ordering);
		app.set_labels(labels);
		app.set_theme(Self::theme(theme.as_deref()));
		if !initial_query.is_empty() {
			app.set_initial_query(&initial_query);
		}
		app
	}

	fn theme(name: Option<&str>) -> memo_search_tui::Theme {
		let Some(name) = name else {
			return default_theme();
		};
		memo_search_tui::by_name(name).unwrap_or_else(|| {
			warn!(theme = name, "unknown theme, using the default");
			default_theme()
		})
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use memo_search_core::{MemoList, ResultOrdering};
	use memo_search_tui::{Focus, ResultsVisibility, UiLabels};
	use tempfile::tempdir;

	use super::*;
	use crate::settings::LoggingConfig;

	fn config(database: std::path::PathBuf) -> ResolvedConfig {
		ResolvedConfig {
			database,
			list: MemoList::Favorites,
			ordering: ResultOrdering::LastResponse,
			theme: Some("day".into()),
			labels: UiLabels::default().with_title("Favorites search"),
			initial_query: "trip".into(),
			logging: LoggingConfig {
				level: "info".into(),
				file: None,
			},
		}
	}

	#[test]
	fn workflow_imports_memos_and_configures_the_screen() {
		let dir = tempdir().unwrap();
		let import = dir.path().join("memos.json");
		fs::write(
			&import,
			r#"[{"title": "Trip to Busan", "is_favorite": true}, {"title": "Bank pin", "is_secret": true}]"#,
		)
		.unwrap();

		let workflow =
			SearchWorkflow::from_config(config(dir.path().join("memos.db")), Some(&import)).expect("builds");

		assert_eq!(workflow.app.list(), MemoList::Favorites);
		assert_eq!(workflow.app.ordering(), ResultOrdering::LastResponse);
		assert_eq!(workflow.app.labels().title, "Favorites search");
		assert_eq!(workflow.app.search_input.text(), "trip");
		assert_eq!(workflow.app.style.theme, memo_search_tui::by_name("light").unwrap());
		assert_eq!(workflow.app.focus(), Focus::Query);
		assert_eq!(workflow.app.visibility(), ResultsVisibility::Idle);

		let found = workflow
			.repository
			.search_by_title_or_text("trip", MemoList::Favorites.filter())
			.unwrap();
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].title, "Trip to Busan");
	}

	#[test]
	fn unknown_theme_falls_back_to_the_default() {
		assert_eq!(ScreenFactory::theme(Some("neon")), default_theme());
		assert_eq!(ScreenFactory::theme(None), default_theme());
	}

	#[test]
	fn failed_import_is_reported() {
		let dir = tempdir().unwrap();
		let import = dir.path().join("broken.json");
		fs::write(&import, "not json").unwrap();

		let err = SearchWorkflow::from_config(config(dir.path().join("memos.db")), Some(&import))
			.err()
			.expect("import fails");
		assert!(err.to_string().contains("failed to import memos"));
	}
}
