use memo_search_core::{MemoList, ResultOrdering};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Which memos the screen searches and how responses are reconciled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) list: Option<String>,
	pub(super) category: Option<i64>,
	pub(super) ordering: Option<String>,
}

pub(super) struct SearchResolution {
	pub(super) list: MemoList,
	pub(super) ordering: ResultOrdering,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(list) = cli.list {
			self.list = Some(list.as_str().to_string());
		}
		if let Some(category) = cli.category {
			self.category = Some(category);
		}
		if let Some(ordering) = cli.ordering {
			self.ordering = Some(ordering.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SearchResolution, ConfigError> {
		let list = match self.list {
			Some(value) => value.parse::<MemoList>().map_err(|err| {
				ConfigError::invalid("search.list", value.clone(), sources.source_for_list(), err.to_string())
			})?,
			None => MemoList::default(),
		};

		if let Some(category) = self.category
			&& !matches!(list, MemoList::Category(_))
		{
			return Err(ConfigError::invalid(
				"search.category",
				category.to_string(),
				sources.source_for_category(),
				format!("only applies to the added list, not `{}`", list.mode_str()),
			));
		}

		let ordering = match self.ordering {
			Some(value) => value.parse::<ResultOrdering>().map_err(|reason| {
				ConfigError::invalid("search.ordering", value.clone(), sources.source_for_ordering(), reason)
			})?,
			None => ResultOrdering::default(),
		};

		Ok(SearchResolution {
			list: list.with_category(self.category),
			ordering,
		})
	}
}
