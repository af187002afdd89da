use crate::context::SearchFilter;
use crate::error::RepositoryError;
use crate::memo::Memo;

/// Commands understood by the background memo worker.
#[derive(Debug)]
pub enum MemoCommand {
	/// Look up memos by title or text.
	Search {
		/// Identifier that lets the screen correlate the response with its request.
		id: u64,
		/// Trimmed, non-empty query text.
		query: String,
		/// Restrictions fixed when the screen opened.
		filter: SearchFilter,
	},
	/// Persist a favorite flag.
	SetFavorite {
		id: u64,
		memo_id: i64,
		value: bool,
	},
	/// Stop the background worker.
	Shutdown,
}

/// Completed unit of background work, handed back to the UI thread.
#[derive(Debug)]
pub enum MemoResponse {
	Search {
		id: u64,
		query: String,
		result: Result<Vec<Memo>, RepositoryError>,
	},
	Favorite {
		id: u64,
		memo_id: i64,
		value: bool,
		result: Result<(), RepositoryError>,
	},
}

impl MemoResponse {
	/// Identifier of the request this response answers.
	#[must_use]
	pub fn id(&self) -> u64 {
		match self {
			Self::Search { id, .. } | Self::Favorite { id, .. } => *id,
		}
	}
}
