//! Core state container for the search screen.

use std::collections::HashMap;
use std::sync::Arc;

use memo_search_core::worker;
use memo_search_core::{MemoList, MemoRepository, ResultOrdering, SearchFilter};
use throbber_widgets_tui::ThrobberState;

use super::SearchRuntime;
use super::favorites::PendingFavorite;
use super::results::{ResultsState, ResultsVisibility};
use super::status::StatusMessage;
use crate::components::rows::MemoRow;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.search.shutdown();
	}
}

/// Widget that owns keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Query,
	Results,
}

/// Aggregate state of the memo search screen.
///
/// The `App` owns the query input, the displayed memo list and the
/// bookkeeping for requests that are still running in the background worker.
pub struct App<'a> {
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) list: MemoList,
	/// Derived once from `list` when the screen opens.
	pub(crate) filter: SearchFilter,
	pub(crate) ui: UiLabels,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) search: SearchRuntime,
	pub(crate) results: ResultsState,
	pub(crate) focus: Focus,
	pub(crate) status: Option<StatusMessage>,
	pub(crate) pending_favorites: HashMap<u64, PendingFavorite>,
}

impl<'a> App<'a> {
	/// Open the screen for `list` with the default result ordering.
	pub fn new(repository: Arc<dyn MemoRepository>, list: MemoList) -> Self {
		Self::with_ordering(repository, list, ResultOrdering::default())
	}

	/// Open the screen for `list`, reconciling overlapping searches with
	/// `ordering`.
	pub fn with_ordering(
		repository: Arc<dyn MemoRepository>,
		list: MemoList,
		ordering: ResultOrdering,
	) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(repository, ordering);
		let search = SearchRuntime::new(tx, rx, latest_query_id, ordering);
		let style = StyleConfig::default();
		let mut search_input = QueryInput::new("");
		search_input.set_style(style.theme.prompt);

		Self {
			search_input,
			style,
			list,
			filter: list.filter(),
			ui: UiLabels::default(),
			throbber_state: ThrobberState::default(),
			search,
			results: ResultsState::default(),
			focus: Focus::Query,
			status: None,
			pending_favorites: HashMap::new(),
		}
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.search_input.set_style(theme.prompt);
	}

	/// Replace the labels rendered by the screen.
	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// Pre-fill the query. The query is searched when the screen starts
	/// running.
	pub fn set_initial_query(&mut self, query: &str) {
		self.search_input.set_text(query);
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.ui
	}

	/// The list the screen was opened from.
	#[must_use]
	pub fn list(&self) -> MemoList {
		self.list
	}

	/// Lookup restrictions attached to every search.
	#[must_use]
	pub fn filter(&self) -> SearchFilter {
		self.filter
	}

	#[must_use]
	pub fn ordering(&self) -> ResultOrdering {
		self.search.ordering()
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Memos currently displayed, in order.
	#[must_use]
	pub fn rows(&self) -> &[MemoRow] {
		&self.results.rows
	}

	#[must_use]
	pub fn visibility(&self) -> ResultsVisibility {
		self.results.visibility
	}

	#[must_use]
	pub fn is_list_visible(&self) -> bool {
		self.results.list_visible()
	}

	#[must_use]
	pub fn is_no_results_visible(&self) -> bool {
		self.results.message_visible()
	}

	/// Index of the selected row.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.results.selected()
	}

	/// Text of the pending status message, if any.
	#[must_use]
	pub fn status_text(&self) -> Option<&str> {
		self.status.as_ref().map(StatusMessage::text)
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		let focus = if focus == Focus::Results && !self.results.list_visible() {
			Focus::Query
		} else {
			focus
		};
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Query);
	}

	/// Move focus back to the query when the list it pointed at disappears.
	pub(crate) fn ensure_focus(&mut self) {
		if self.focus == Focus::Results && !self.results.list_visible() {
			self.set_focus(Focus::Query);
		}
	}

	pub(crate) fn report_error(&mut self, text: String) {
		self.status = Some(StatusMessage::error(text));
	}

	/// Drop the status message once it has been shown long enough.
	pub(crate) fn expire_status(&mut self) {
		if self.status.as_ref().is_some_and(StatusMessage::is_expired) {
			self.status = None;
		}
	}
}
