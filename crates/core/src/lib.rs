//! Core types for the `memo-search` screen.
//!
//! The crate owns everything that is not terminal UI: the memo projection the
//! screen displays, the list context it was opened with, the repository
//! interface it talks to (plus a SQLite implementation), and the background
//! worker that runs repository calls off the UI thread.

pub mod app_dirs;
pub mod context;
pub mod error;
pub mod memo;
pub mod repository;
pub mod worker;

pub use crate::context::{MISSING_CATEGORY, MemoList, SearchFilter};
pub use crate::error::{RepositoryError, Result};
pub use crate::memo::{Memo, NewMemo};
pub use crate::repository::{MemoRepository, SqliteMemoRepository};
pub use crate::worker::{MemoCommand, MemoResponse, ResultOrdering};
