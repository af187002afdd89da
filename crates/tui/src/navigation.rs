//! Requests the search screen hands back to its host.

use std::fmt;

use serde::Serialize;

/// Screens known to the host navigation controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenName {
	SearchMemo,
	ReadMemo,
}

impl ScreenName {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::SearchMemo => "search_memo",
			Self::ReadMemo => "read_memo",
		}
	}
}

impl fmt::Display for ScreenName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Arguments passed to the read-memo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenArgs {
	pub memo_id: i64,
}

/// Outcome of the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigationRequest {
	/// Pop a screen off the stack.
	Remove { screen: ScreenName },
	/// Swap the current screen for another one.
	Replace {
		screen: ScreenName,
		args: ScreenArgs,
		add_to_back_stack: bool,
		animate: bool,
	},
}

impl NavigationRequest {
	/// Leave the search screen.
	#[must_use]
	pub fn back() -> Self {
		Self::Remove {
			screen: ScreenName::SearchMemo,
		}
	}

	/// Open the read-memo screen for `memo_id`.
	#[must_use]
	pub fn read_memo(memo_id: i64) -> Self {
		Self::Replace {
			screen: ScreenName::ReadMemo,
			args: ScreenArgs { memo_id },
			add_to_back_stack: true,
			animate: true,
		}
	}

	/// Memo carried by the request, if any.
	#[must_use]
	pub fn memo_id(&self) -> Option<i64> {
		match self {
			Self::Remove { .. } => None,
			Self::Replace { args, .. } => Some(args.memo_id),
		}
	}
}

impl fmt::Display for NavigationRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Remove { screen } => write!(f, "remove {screen}"),
			Self::Replace { screen, args, .. } => {
				write!(f, "replace {screen} memo_id={}", args.memo_id)
			}
		}
	}
}
