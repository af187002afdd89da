//! Background coordination for memo lookups and favorite updates.
//!
//! The [`SearchRuntime`] encapsulates communication with the memo worker,
//! ensuring requests are sequenced so that, under
//! [`ResultOrdering::LatestQuery`], only the newest search influences the
//! displayed list.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use memo_search_core::{MemoCommand, MemoResponse, ResultOrdering, SearchFilter};
use tracing::debug;

/// Thin wrapper around the memo worker channels.
pub(crate) struct SearchRuntime {
	tx: Sender<MemoCommand>,
	rx: Receiver<MemoResponse>,
	latest_query_id: Arc<AtomicU64>,
	ordering: ResultOrdering,
	next_request_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	/// Create a new search runtime with the provided communication channels.
	pub(crate) fn new(
		tx: Sender<MemoCommand>,
		rx: Receiver<MemoResponse>,
		latest_query_id: Arc<AtomicU64>,
		ordering: ResultOrdering,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			ordering,
			next_request_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(MemoCommand::Shutdown);
	}

	pub(crate) fn ordering(&self) -> ResultOrdering {
		self.ordering
	}

	fn next_id(&mut self) -> u64 {
		self.next_request_id = self.next_request_id.saturating_add(1);
		self.next_request_id
	}

	/// Dispatch a lookup for `query` and make it the latest search.
	pub(crate) fn issue_search(&mut self, query: String, filter: SearchFilter) -> u64 {
		let id = self.next_id();
		self.current_query_id = Some(id);
		self.in_flight = true;
		self.latest_query_id.store(id, AtomicOrdering::Release);
		let _ = self.tx.send(MemoCommand::Search { id, query, filter });
		id
	}

	/// Dispatch a favorite update. Updates never supersede each other.
	pub(crate) fn issue_favorite(&mut self, memo_id: i64, value: bool) -> u64 {
		let id = self.next_id();
		let _ = self.tx.send(MemoCommand::SetFavorite { id, memo_id, value });
		id
	}

	/// Forget the current search so none of the outstanding lookups is
	/// considered latest anymore.
	pub(crate) fn invalidate(&mut self) {
		let id = self.next_id();
		self.latest_query_id.store(id, AtomicOrdering::Release);
		if self.current_query_id.take().is_some() {
			debug!(superseded_by = id, "invalidated outstanding search");
		}
		self.in_flight = false;
	}

	/// Whether a search response with `id` may be applied to the list.
	pub(crate) fn accepts(&self, id: u64) -> bool {
		match self.ordering {
			ResultOrdering::LatestQuery => Some(id) == self.current_query_id,
			ResultOrdering::LastResponse => true,
		}
	}

	pub(crate) fn record_completion(&mut self, id: u64) {
		if Some(id) == self.current_query_id {
			self.in_flight = false;
		}
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn has_issued_query(&self) -> bool {
		self.current_query_id.is_some()
	}

	pub(crate) fn try_recv(&mut self) -> Result<MemoResponse, TryRecvError> {
		self.rx.try_recv()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	fn runtime(ordering: ResultOrdering) -> (SearchRuntime, Receiver<MemoCommand>, Arc<AtomicU64>) {
		let (command_tx, command_rx) = mpsc::channel();
		let (_response_tx, response_rx) = mpsc::channel();
		let latest = Arc::new(AtomicU64::new(0));
		let runtime = SearchRuntime::new(command_tx, response_rx, Arc::clone(&latest), ordering);
		(runtime, command_rx, latest)
	}

	#[test]
	fn newer_searches_supersede_older_ones() {
		let (mut runtime, commands, latest) = runtime(ResultOrdering::LatestQuery);
		let first = runtime.issue_search("a".into(), SearchFilter::default());
		let second = runtime.issue_search("ab".into(), SearchFilter::default());

		assert_eq!(latest.load(AtomicOrdering::Acquire), second);
		assert!(!runtime.accepts(first));
		assert!(runtime.accepts(second));

		runtime.record_completion(first);
		assert!(runtime.is_in_flight());
		runtime.record_completion(second);
		assert!(!runtime.is_in_flight());
		assert_eq!(commands.try_iter().count(), 2);
	}

	#[test]
	fn last_response_accepts_everything() {
		let (mut runtime, _commands, _latest) = runtime(ResultOrdering::LastResponse);
		let first = runtime.issue_search("a".into(), SearchFilter::default());
		runtime.issue_search("ab".into(), SearchFilter::default());
		runtime.invalidate();
		assert!(runtime.accepts(first));
	}

	#[test]
	fn invalidate_moves_the_latest_marker() {
		let (mut runtime, _commands, latest) = runtime(ResultOrdering::LatestQuery);
		let id = runtime.issue_search("a".into(), SearchFilter::default());
		runtime.invalidate();
		assert!(!runtime.accepts(id));
		assert!(!runtime.is_in_flight());
		assert!(!runtime.has_issued_query());
		assert!(latest.load(AtomicOrdering::Acquire) > id);
	}

	#[test]
	fn favorite_updates_do_not_touch_the_latest_search() {
		let (mut runtime, commands, latest) = runtime(ResultOrdering::LatestQuery);
		let search = runtime.issue_search("a".into(), SearchFilter::default());
		let update = runtime.issue_favorite(7, true);
		assert!(update > search);
		assert_eq!(latest.load(AtomicOrdering::Acquire), search);
		assert!(runtime.accepts(search));

		let sent: Vec<_> = commands.try_iter().collect();
		assert!(matches!(
			sent.last(),
			Some(MemoCommand::SetFavorite {
				memo_id: 7,
				value: true,
				..
			})
		));
	}
}
