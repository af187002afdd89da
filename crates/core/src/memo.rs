use serde::{Deserialize, Serialize};

/// Read projection of a memo as displayed by the search screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
	pub id: i64,
	pub title: String,
	#[serde(default)]
	pub text: String,
	#[serde(default)]
	pub is_secret: bool,
	#[serde(default)]
	pub is_favorite: bool,
	#[serde(default)]
	pub category_id: i64,
}

/// Memo fields supplied when inserting a new record; the id is assigned by the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMemo {
	pub title: String,
	#[serde(default)]
	pub text: String,
	#[serde(default)]
	pub is_secret: bool,
	#[serde(default)]
	pub is_favorite: bool,
	#[serde(default)]
	pub category_id: i64,
}

impl NewMemo {
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			text: text.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn secret(mut self) -> Self {
		self.is_secret = true;
		self
	}

	#[must_use]
	pub fn favorite(mut self) -> Self {
		self.is_favorite = true;
		self
	}

	#[must_use]
	pub fn in_category(mut self, category_id: i64) -> Self {
		self.category_id = category_id;
		self
	}
}
