use std::sync::mpsc::TryRecvError;

use memo_search_core::{Memo, MemoResponse, RepositoryError};
use tracing::{debug, trace, warn};

use crate::app::state::App;

impl<'a> App<'a> {
	/// React to an edit of the query text.
	pub fn on_query_changed(&mut self) {
		self.submit_query();
	}

	/// React to the explicit search action.
	pub fn on_search_pressed(&mut self) {
		self.submit_query();
	}

	/// Issue one background lookup for `query` with the screen's filter.
	pub fn search(&mut self, query: &str) {
		let id = self.search.issue_search(query.to_string(), self.filter);
		debug!(id, query, "issued memo search");
	}

	fn submit_query(&mut self) {
		let query = self.search_input.text().trim().to_string();
		if query.is_empty() {
			self.search.invalidate();
			self.results.hide();
			self.ensure_focus();
			return;
		}
		self.search(&query);
	}

	/// Search the pre-filled query once when the screen starts.
	pub(crate) fn hydrate_initial_results(&mut self) {
		if !self.search.has_issued_query() && !self.search_input.text().trim().is_empty() {
			self.on_search_pressed();
		}
	}

	/// Drain any responses waiting on the worker channel.
	pub(crate) fn pump_memo_responses(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(response) => self.handle_memo_response(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_memo_response(&mut self, response: MemoResponse) {
		match response {
			MemoResponse::Search { id, query, result } => {
				self.handle_search_response(id, &query, result);
			}
			MemoResponse::Favorite {
				id,
				memo_id,
				value,
				result,
			} => self.handle_favorite_response(id, memo_id, value, result),
		}
	}

	/// Apply a search response if the ordering policy allows it.
	fn handle_search_response(
		&mut self,
		id: u64,
		query: &str,
		result: Result<Vec<Memo>, RepositoryError>,
	) {
		if !self.search.accepts(id) {
			trace!(id, query, "dropping stale search response");
			return;
		}
		self.search.record_completion(id);

		match result {
			Ok(memos) => {
				debug!(id, query, count = memos.len(), "applying search results");
				self.results.replace(memos);
				self.ensure_focus();
			}
			Err(err) => {
				warn!(id, query, error = %err, "search failed, keeping previous results");
				self.report_error(format!("Search failed: {err}"));
			}
		}
	}
}
