//! Launch context for the search screen.
//!
//! The host opens the screen with a mode string and, for category lists, a
//! category id. Both are fixed for the lifetime of the screen and determine the
//! [`SearchFilter`] attached to every lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;

/// Category id used when a category list is opened without an id.
pub const MISSING_CATEGORY: i64 = -1;

/// Which memo list the screen was opened from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemoList {
	#[default]
	All,
	Favorites,
	/// The "added" list scoped to one category.
	Category(Option<i64>),
}

/// Optional lookup restrictions derived from the [`MemoList`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
	pub favorites_only: Option<bool>,
	pub category_id: Option<i64>,
}

impl MemoList {
	/// Derive the lookup filter for this list.
	#[must_use]
	pub fn filter(&self) -> SearchFilter {
		match self {
			Self::All => SearchFilter::default(),
			Self::Favorites => SearchFilter {
				favorites_only: Some(true),
				category_id: None,
			},
			Self::Category(id) => SearchFilter {
				favorites_only: None,
				category_id: Some(id.unwrap_or(MISSING_CATEGORY)),
			},
		}
	}

	#[must_use]
	pub fn is_favorites(&self) -> bool {
		matches!(self, Self::Favorites)
	}

	/// Mode string understood by [`MemoList::from_str`].
	#[must_use]
	pub fn mode_str(&self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Favorites => "favorites",
			Self::Category(_) => "added",
		}
	}

	/// Short human readable label for headers and summaries.
	#[must_use]
	pub fn label(&self) -> String {
		match self {
			Self::All => "All memos".to_string(),
			Self::Favorites => "Favorites".to_string(),
			Self::Category(Some(id)) => format!("Category {id}"),
			Self::Category(None) => "Category (none)".to_string(),
		}
	}

	/// Attach a category id to a mode parsed from a string. Only category lists
	/// keep the id.
	#[must_use]
	pub fn with_category(self, category_id: Option<i64>) -> Self {
		match self {
			Self::Category(_) => Self::Category(category_id),
			other => other,
		}
	}
}

impl FromStr for MemoList {
	type Err = RepositoryError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"all" => Ok(Self::All),
			"favorite" | "favorites" => Ok(Self::Favorites),
			"added" | "category" => Ok(Self::Category(None)),
			_ => Err(RepositoryError::InvalidMemoList(value.to_string())),
		}
	}
}

impl fmt::Display for MemoList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.label())
	}
}
