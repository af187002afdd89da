//! Error types shared by the repository and the background worker.

use thiserror::Error;

/// Failure reported by a [`crate::MemoRepository`] call.
#[derive(Debug, Error)]
pub enum RepositoryError {
	/// SQLite rejected a statement or could not open the database.
	#[error("database error: {0}")]
	Database(#[from] rusqlite::Error),

	/// Filesystem error while preparing the database location.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Malformed memo import document.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	/// No memo exists with the given identifier.
	#[error("memo {0} not found")]
	NotFound(i64),

	/// A previous holder of the connection panicked.
	#[error("database connection lock is poisoned")]
	Poisoned,

	/// The backing store cannot serve requests right now.
	#[error("repository unavailable: {0}")]
	Unavailable(String),

	/// Screen mode string that does not name a memo list.
	#[error("unknown memo list `{0}` (expected all, favorites or added)")]
	InvalidMemoList(String),
}

/// Result alias for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
