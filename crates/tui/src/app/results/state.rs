//! State management for the results table.

use memo_search_core::Memo;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::rows::MemoRow;
use crate::components::scrollbar::ScrollMetrics;

/// Rows moved by PageUp/PageDown before the first render measured the view.
const DEFAULT_PAGE_ROWS: usize = 10;

/// Which of the two mutually exclusive result widgets is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultsVisibility {
	/// No query yet, or the query was cleared: list and message both hidden.
	#[default]
	Idle,
	/// The last applied search matched nothing: only the message is shown.
	Empty,
	/// The last applied search matched memos: only the list is shown.
	Populated,
}

/// Aggregate state for the results table.
pub(crate) struct ResultsState {
	/// Memos of the last applied search, in display order.
	pub rows: Vec<MemoRow>,
	/// Selection state for the results table.
	pub table_state: TableState,
	/// Scrollbar state for the results table.
	pub scrollbar_state: ScrollbarState,
	pub visibility: ResultsVisibility,
	/// Memo rows that fit in the last rendered viewport.
	pub viewport_rows: usize,
	/// Cached scroll metrics based on the last rendered viewport.
	pub scroll_metrics: ScrollMetrics,
}

impl Default for ResultsState {
	fn default() -> Self {
		Self {
			rows: Vec::new(),
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			visibility: ResultsVisibility::Idle,
			viewport_rows: 0,
			scroll_metrics: ScrollMetrics::default(),
		}
	}
}

impl ResultsState {
	/// Replace the list wholesale with a search result.
	pub fn replace(&mut self, memos: Vec<Memo>) {
		self.rows = memos.into_iter().map(MemoRow::from).collect();
		self.visibility = if self.rows.is_empty() {
			ResultsVisibility::Empty
		} else {
			ResultsVisibility::Populated
		};
		*self.table_state.offset_mut() = 0;
		self.ensure_selection();
	}

	/// Hide both the list and the "no results" message.
	pub fn hide(&mut self) {
		self.rows.clear();
		self.visibility = ResultsVisibility::Idle;
		self.ensure_selection();
	}

	pub fn list_visible(&self) -> bool {
		self.visibility == ResultsVisibility::Populated
	}

	pub fn message_visible(&self) -> bool {
		self.visibility == ResultsVisibility::Empty
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}

	/// Current position of the row showing `memo_id`.
	pub fn position_of(&self, memo_id: i64) -> Option<usize> {
		self.rows.iter().position(|row| row.memo.id == memo_id)
	}

	pub fn row_by_memo_mut(&mut self, memo_id: i64) -> Option<&mut MemoRow> {
		self.rows.iter_mut().find(|row| row.memo.id == memo_id)
	}

	/// Remove the row at `index`. A list emptied this way shows the
	/// "no results" message.
	pub fn remove_at(&mut self, index: usize) -> Option<MemoRow> {
		if index >= self.rows.len() {
			return None;
		}
		let removed = self.rows.remove(index);
		if self.rows.is_empty() {
			self.visibility = ResultsVisibility::Empty;
		}
		self.ensure_selection();
		Some(removed)
	}

	/// Ensure the row selection remains valid for the current list.
	pub fn ensure_selection(&mut self) {
		let len = self.len();
		if len == 0 {
			self.table_state.select(None);
			*self.table_state.offset_mut() = 0;
		} else {
			match self.table_state.selected() {
				None => self.table_state.select(Some(0)),
				Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
				Some(_) => {}
			}
		}
	}

	/// Move the selection up one row. Returns `false` when already on the
	/// first row.
	pub fn select_previous(&mut self) -> bool {
		match self.table_state.selected() {
			Some(selected) if selected > 0 => {
				self.table_state.select(Some(selected - 1));
				true
			}
			_ => false,
		}
	}

	pub fn select_next(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	pub fn page_up(&mut self) {
		let step = self.page_rows();
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	pub fn page_down(&mut self) {
		let step = self.page_rows();
		if let Some(selected) = self.table_state.selected() {
			let last = self.len().saturating_sub(1);
			self.table_state.select(Some((selected + step).min(last)));
		}
	}

	pub fn select_first(&mut self) {
		if !self.rows.is_empty() {
			self.table_state.select(Some(0));
		}
	}

	pub fn select_last(&mut self) {
		if !self.rows.is_empty() {
			self.table_state.select(Some(self.len() - 1));
		}
	}

	fn page_rows(&self) -> usize {
		if self.viewport_rows == 0 {
			DEFAULT_PAGE_ROWS
		} else {
			self.viewport_rows
		}
	}

	/// Update scrollbar state to match the list and the viewport measured
	/// during rendering.
	pub fn update_scrollbar(&mut self, viewport_rows: usize) {
		self.viewport_rows = viewport_rows;
		let metrics = ScrollMetrics::compute(self.len(), viewport_rows);
		self.scroll_metrics = metrics;
		if !metrics.needs_scrollbar {
			*self.table_state.offset_mut() = 0;
			self.scrollbar_state = ScrollbarState::default();
			return;
		}

		// Keep the selection inside the viewport the table is about to draw.
		let mut offset = self.table_state.offset().min(metrics.max_scroll);
		if let Some(selected) = self.table_state.selected() {
			if selected < offset {
				offset = selected;
			} else if selected >= offset + metrics.viewport_len {
				offset = selected + 1 - metrics.viewport_len;
			}
		}
		*self.table_state.offset_mut() = offset;

		self.scrollbar_state = self
			.scrollbar_state
			.content_length(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(metrics.scrollbar_position(offset));
	}
}
