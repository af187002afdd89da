//! Inline favorite toggling with optimistic local state.
//!
//! Toggling flips the row's in-memory flag immediately and sends one update
//! to the repository. Everything the user can see (the star icon, removal
//! from the favorites list, error messages) waits for the acknowledgement.

use memo_search_core::RepositoryError;
use tracing::{debug, warn};

use crate::app::state::App;

/// Update that has been sent but not acknowledged yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingFavorite {
	pub memo_id: i64,
	pub value: bool,
}

impl<'a> App<'a> {
	/// Toggle the favorite flag of the row at `index`.
	///
	/// Returns `false` when there is no such row.
	pub fn on_favorite_toggled(&mut self, index: usize) -> bool {
		let Some(row) = self.results.rows.get_mut(index) else {
			return false;
		};
		let value = !row.memo.is_favorite;
		row.memo.is_favorite = value;
		let memo_id = row.memo.id;

		let id = self.search.issue_favorite(memo_id, value);
		self.pending_favorites
			.insert(id, PendingFavorite { memo_id, value });
		debug!(id, memo_id, value, "issued favorite update");
		true
	}

	/// Number of favorite updates still waiting for an acknowledgement.
	#[must_use]
	pub fn pending_favorite_count(&self) -> usize {
		self.pending_favorites.len()
	}

	pub(crate) fn handle_favorite_response(
		&mut self,
		id: u64,
		memo_id: i64,
		value: bool,
		result: Result<(), RepositoryError>,
	) {
		self.pending_favorites.remove(&id);

		if let Err(err) = result {
			warn!(id, memo_id, value, error = %err, "reverting favorite toggle");
			// Only revert rows nobody toggled again in the meantime.
			if let Some(row) = self.results.row_by_memo_mut(memo_id)
				&& row.memo.is_favorite == value
			{
				row.memo.is_favorite = !value;
			}
			self.report_error(format!("Could not update favorite: {err}"));
			return;
		}

		if self.list.is_favorites() && !value {
			if let Some(index) = self.results.position_of(memo_id) {
				self.results.remove_at(index);
				self.ensure_focus();
			}
		} else {
			let intended = self.newer_pending_value(id, memo_id).unwrap_or(value);
			if let Some(row) = self.results.row_by_memo_mut(memo_id) {
				row.shown_favorite = value;
				// A search may have replaced the row with its pre-write copy.
				row.memo.is_favorite = intended;
			}
		}
	}

	/// Value of the latest update for `memo_id` issued after `id` that is
	/// still waiting for its acknowledgement.
	fn newer_pending_value(&self, id: u64, memo_id: i64) -> Option<bool> {
		self.pending_favorites
			.iter()
			.filter(|(pending_id, pending)| **pending_id > id && pending.memo_id == memo_id)
			.max_by_key(|(pending_id, _)| **pending_id)
			.map(|(_, pending)| pending.value)
	}
}
