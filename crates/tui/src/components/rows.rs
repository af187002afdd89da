use memo_search_core::Memo;
use ratatui::style::Modifier;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Cell, Row};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;

/// Icon for a memo whose favorite flag is set.
pub const FAVORITE_ICON: &str = "★";
/// Icon for a memo that is not a favorite.
pub const NOT_FAVORITE_ICON: &str = "☆";
/// Terminal lines occupied by one memo: the entry and its divider.
pub const ROW_HEIGHT: u16 = 2;

const ELLIPSIS: char = '…';

/// A memo as displayed in the results list.
///
/// `memo.is_favorite` is the in-memory flag, flipped as soon as the user
/// toggles it. `shown_favorite` drives the star icon and only follows once the
/// repository acknowledged the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoRow {
	pub memo: Memo,
	pub shown_favorite: bool,
}

impl From<Memo> for MemoRow {
	fn from(memo: Memo) -> Self {
		let shown_favorite = memo.is_favorite;
		Self {
			memo,
			shown_favorite,
		}
	}
}

impl MemoRow {
	/// Text shown for this row. Secret memos never expose their title.
	#[must_use]
	pub fn display_title<'a>(&'a self, secret_placeholder: &'a str) -> &'a str {
		if self.memo.is_secret {
			secret_placeholder
		} else {
			&self.memo.title
		}
	}

	#[must_use]
	pub fn icon(&self) -> &'static str {
		if self.shown_favorite {
			FAVORITE_ICON
		} else {
			NOT_FAVORITE_ICON
		}
	}
}

/// Build two-line table rows (entry + divider) for the visible memos.
#[must_use]
pub fn build_memo_rows<'a>(
	rows: &'a [MemoRow],
	secret_placeholder: &'a str,
	title_width: u16,
	theme: &Theme,
) -> Vec<Row<'a>> {
	let divider = "─".repeat(usize::from(title_width));
	rows.iter()
		.map(|row| {
			let icon_style = if row.shown_favorite {
				theme.favorite
			} else {
				theme.muted
			};
			let title_style = if row.memo.is_secret {
				theme.muted.add_modifier(Modifier::ITALIC)
			} else {
				ratatui::style::Style::default()
			};
			let title = truncate_to_width(row.display_title(secret_placeholder), title_width);

			let icon_cell = Cell::from(Text::from(vec![
				Line::styled(row.icon(), icon_style),
				Line::styled("──", theme.muted),
			]));
			let title_cell = Cell::from(Text::from(vec![
				Line::styled(title, title_style),
				Line::styled(divider.clone(), theme.muted),
			]));
			Row::new([icon_cell, title_cell]).height(ROW_HEIGHT)
		})
		.collect()
}

/// Cut `text` to at most `width` terminal columns, marking the cut with an
/// ellipsis.
#[must_use]
pub fn truncate_to_width(text: &str, width: u16) -> String {
	let width = usize::from(width);
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}

	let mut truncated = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		truncated.push(ch);
		used += ch_width;
	}
	truncated.push(ELLIPSIS);
	truncated
}

#[cfg(test)]
mod tests {
	use super::*;

	fn memo(title: &str, secret: bool, favorite: bool) -> Memo {
		Memo {
			id: 1,
			title: title.to_string(),
			text: String::new(),
			is_secret: secret,
			is_favorite: favorite,
			category_id: 0,
		}
	}

	#[test]
	fn secret_rows_show_the_placeholder() {
		let row = MemoRow::from(memo("Bank pin", true, false));
		assert_eq!(row.display_title("hidden"), "hidden");
		let plain = MemoRow::from(memo("Groceries", false, false));
		assert_eq!(plain.display_title("hidden"), "Groceries");
	}

	#[test]
	fn icon_follows_the_acknowledged_flag() {
		let mut row = MemoRow::from(memo("Trip", false, true));
		assert_eq!(row.icon(), FAVORITE_ICON);
		row.memo.is_favorite = false;
		assert_eq!(row.icon(), FAVORITE_ICON);
		row.shown_favorite = false;
		assert_eq!(row.icon(), NOT_FAVORITE_ICON);
	}

	#[test]
	fn truncation_respects_wide_characters() {
		assert_eq!(truncate_to_width("short", 10), "short");
		assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
		assert_eq!(truncate_to_width("메모메모", 5), "메모…");
		assert_eq!(truncate_to_width("abc", 0), "");
	}

	#[test]
	fn one_row_per_memo() {
		let rows = [
			MemoRow::from(memo("a", false, false)),
			MemoRow::from(memo("b", true, true)),
		];
		assert_eq!(build_memo_rows(&rows, "secret", 20, &Theme::default()).len(), 2);
	}
}
