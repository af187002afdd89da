use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

use super::MemoRepository;
use crate::context::SearchFilter;
use crate::error::{RepositoryError, Result};
use crate::memo::{Memo, NewMemo};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS memos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    text TEXT NOT NULL DEFAULT '',
    is_secret INTEGER NOT NULL DEFAULT 0,
    is_favorite INTEGER NOT NULL DEFAULT 0,
    category_id INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_memos_category ON memos(category_id);
CREATE INDEX IF NOT EXISTS idx_memos_favorite ON memos(is_favorite);
"#;

const MEMO_COLUMNS: &str = "id, title, text, is_secret, is_favorite, category_id";

/// Memo store backed by SQLite.
pub struct SqliteMemoRepository {
	conn: Mutex<Connection>,
	path: Option<PathBuf>,
}

impl SqliteMemoRepository {
	/// Open or create the memo database at `path`.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}

		let conn = Connection::open(path)?;
		conn.execute_batch(SCHEMA)?;
		debug!(path = %path.display(), "opened memo database");

		Ok(Self {
			conn: Mutex::new(conn),
			path: Some(path.to_path_buf()),
		})
	}

	/// Open a throwaway in-memory database.
	pub fn in_memory() -> Result<Self> {
		let conn = Connection::open_in_memory()?;
		conn.execute_batch(SCHEMA)?;
		Ok(Self {
			conn: Mutex::new(conn),
			path: None,
		})
	}

	/// Database file path, `None` for in-memory stores.
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Insert a memo and return its id.
	pub fn insert(&self, memo: &NewMemo) -> Result<i64> {
		let conn = self.lock()?;
		insert_with(&conn, memo)
	}

	/// Insert a batch of memos in one transaction. Returns the number inserted.
	pub fn import<I>(&self, memos: I) -> Result<usize>
	where
		I: IntoIterator<Item = NewMemo>,
	{
		let mut conn = self.lock()?;
		let tx = conn.transaction()?;
		let mut count = 0;
		for memo in memos {
			insert_with(&tx, &memo)?;
			count += 1;
		}
		tx.commit()?;
		Ok(count)
	}

	/// Import a JSON array of memos from disk.
	pub fn import_json(&self, path: impl AsRef<Path>) -> Result<usize> {
		let contents = fs::read_to_string(path.as_ref())?;
		let memos: Vec<NewMemo> = serde_json::from_str(&contents)?;
		self.import(memos)
	}

	fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
		self.conn.lock().map_err(|_| RepositoryError::Poisoned)
	}
}

impl MemoRepository for SqliteMemoRepository {
	fn search_by_title_or_text(&self, query: &str, filter: SearchFilter) -> Result<Vec<Memo>> {
		let conn = self.lock()?;
		let sql = format!(
			r"SELECT {MEMO_COLUMNS} FROM memos
			WHERE (title LIKE ?1 ESCAPE '\' OR text LIKE ?1 ESCAPE '\')
			AND (?2 IS NULL OR is_favorite = ?2)
			AND (?3 IS NULL OR category_id = ?3)
			ORDER BY id DESC"
		);
		let mut stmt = conn.prepare(&sql)?;
		let pattern = format!("%{}%", escape_like(query));
		let memos = stmt
			.query_map(
				params![pattern, filter.favorites_only, filter.category_id],
				memo_from_row,
			)?
			.collect::<rusqlite::Result<Vec<_>>>()?;
		Ok(memos)
	}

	fn set_favorite(&self, memo_id: i64, value: bool) -> Result<()> {
		let conn = self.lock()?;
		let changed = conn.execute(
			"UPDATE memos SET is_favorite = ?1 WHERE id = ?2",
			params![value, memo_id],
		)?;
		if changed == 0 {
			return Err(RepositoryError::NotFound(memo_id));
		}
		Ok(())
	}

	fn memo(&self, memo_id: i64) -> Result<Option<Memo>> {
		let conn = self.lock()?;
		let memo = conn
			.query_row(
				&format!("SELECT {MEMO_COLUMNS} FROM memos WHERE id = ?1"),
				params![memo_id],
				memo_from_row,
			)
			.optional()?;
		Ok(memo)
	}
}

fn insert_with(conn: &Connection, memo: &NewMemo) -> Result<i64> {
	conn.execute(
		"INSERT INTO memos (title, text, is_secret, is_favorite, category_id) VALUES (?1, ?2, ?3, ?4, ?5)",
		params![
			memo.title,
			memo.text,
			memo.is_secret,
			memo.is_favorite,
			memo.category_id
		],
	)?;
	Ok(conn.last_insert_rowid())
}

fn memo_from_row(row: &Row<'_>) -> rusqlite::Result<Memo> {
	Ok(Memo {
		id: row.get(0)?,
		title: row.get(1)?,
		text: row.get(2)?,
		is_secret: row.get(3)?,
		is_favorite: row.get(4)?,
		category_id: row.get(5)?,
	})
}

/// Escape `LIKE` wildcards so the query matches literally.
fn escape_like(query: &str) -> String {
	let mut escaped = String::with_capacity(query.len());
	for ch in query.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			escaped.push('\\');
		}
		escaped.push(ch);
	}
	escaped
}
