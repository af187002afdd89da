use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace, warn};

use super::ResultOrdering;
use super::commands::{MemoCommand, MemoResponse};
use crate::repository::MemoRepository;

/// Launches the background worker thread and returns communication channels.
///
/// The returned counter holds the id of the latest search the screen issued;
/// the worker consults it to skip lookups that were superseded before they
/// started.
pub fn spawn(
	repository: Arc<dyn MemoRepository>,
	ordering: ResultOrdering,
) -> (Sender<MemoCommand>, Receiver<MemoResponse>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || {
		worker_loop(&repository, ordering, command_rx, response_tx, thread_latest)
	});

	(command_tx, response_rx, latest_query_id)
}

fn worker_loop(
	repository: &Arc<dyn MemoRepository>,
	ordering: ResultOrdering,
	command_rx: Receiver<MemoCommand>,
	response_tx: Sender<MemoResponse>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(repository, ordering, &response_tx, &latest_query_id, command) {
			break;
		}
	}
	debug!("memo worker stopped");
}

fn handle_command(
	repository: &Arc<dyn MemoRepository>,
	ordering: ResultOrdering,
	response_tx: &Sender<MemoResponse>,
	latest_query_id: &Arc<AtomicU64>,
	command: MemoCommand,
) -> bool {
	match command {
		MemoCommand::Search { id, query, filter } => {
			debug!(id, %query, ?filter, "dispatching memo search");
			let repository = Arc::clone(repository);
			let response_tx = response_tx.clone();
			let latest = Arc::clone(latest_query_id);
			thread::spawn(move || {
				if ordering.skips_superseded() && latest.load(Ordering::Acquire) != id {
					trace!(id, "skipping superseded memo search");
					return;
				}
				let result = repository.search_by_title_or_text(&query, filter);
				if let Err(err) = &result {
					warn!(id, %query, error = %err, "memo search failed");
				}
				let _ = response_tx.send(MemoResponse::Search { id, query, result });
			});
			true
		}
		MemoCommand::SetFavorite { id, memo_id, value } => {
			debug!(id, memo_id, value, "dispatching favorite update");
			let repository = Arc::clone(repository);
			let response_tx = response_tx.clone();
			thread::spawn(move || {
				let result = repository.set_favorite(memo_id, value);
				if let Err(err) = &result {
					warn!(id, memo_id, value, error = %err, "favorite update failed");
				}
				let _ = response_tx.send(MemoResponse::Favorite {
					id,
					memo_id,
					value,
					result,
				});
			});
			true
		}
		MemoCommand::Shutdown => false,
	}
}
