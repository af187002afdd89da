//! Background execution of repository calls.
//!
//! The screen sends [`MemoCommand`]s and drains [`MemoResponse`]s on its own
//! thread; every repository call runs as an independent background unit so
//! overlapping requests may complete in any order.

mod commands;
mod dispatch;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use commands::{MemoCommand, MemoResponse};
pub use dispatch::spawn;

/// How responses to overlapping searches are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultOrdering {
	/// Only the response to the most recently issued query is applied;
	/// superseded lookups are skipped when possible and ignored otherwise.
	#[default]
	LatestQuery,
	/// Every response is applied as it arrives, so a slow stale lookup can
	/// overwrite a newer one.
	LastResponse,
}

impl ResultOrdering {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::LatestQuery => "latest_query",
			Self::LastResponse => "last_response",
		}
	}

	/// Whether the worker may drop a lookup that is no longer the latest.
	#[must_use]
	pub fn skips_superseded(self) -> bool {
		matches!(self, Self::LatestQuery)
	}
}

impl fmt::Display for ResultOrdering {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ResultOrdering {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"latest_query" => Ok(Self::LatestQuery),
			"last_response" => Ok(Self::LastResponse),
			other => Err(format!(
				"unknown result ordering `{other}` (expected latest_query or last_response)"
			)),
		}
	}
}
