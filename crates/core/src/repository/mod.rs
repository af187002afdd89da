//! Data access consumed by the search screen.

mod sqlite;

pub use sqlite::SqliteMemoRepository;

use crate::context::SearchFilter;
use crate::error::Result;
use crate::memo::Memo;

/// Storage collaborator used by the search screen.
///
/// Calls are blocking; the screen always invokes them from the background
/// worker, never from the UI thread.
pub trait MemoRepository: Send + Sync {
	/// Memos whose title or text contains `query`, restricted by `filter`,
	/// newest first.
	fn search_by_title_or_text(&self, query: &str, filter: SearchFilter) -> Result<Vec<Memo>>;

	/// Persist the favorite flag of one memo.
	fn set_favorite(&self, memo_id: i64, value: bool) -> Result<()>;

	/// Look up a single memo.
	fn memo(&self, memo_id: i64) -> Result<Option<Memo>>;
}
