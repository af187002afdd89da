use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, HighlightSpacing, Row, ScrollbarState, Table, TableState};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
pub(crate) const ICON_COLUMN_WIDTH: u16 = 2;

/// Fully materialized memo table.
pub struct MemoTableSpec<'a> {
	/// Rendered memo rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Whether the content overflows and a scrollbar is drawn.
	pub needs_scrollbar: bool,
}

/// Render the bordered memo table with an optional scrollbar.
pub fn render_memo_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	table: MemoTableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());

	if let Some(title) = table.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let table_area = if table.needs_scrollbar {
		render_scrollbar(frame, inner, scrollbar_state, theme)
	} else {
		inner
	};

	let widths = [Constraint::Length(ICON_COLUMN_WIDTH), Constraint::Fill(1)];
	let table = Table::new(table.rows, widths)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);
}

/// Columns available to the title text inside a table of `area` width.
#[must_use]
pub fn title_column_width(area: Rect, needs_scrollbar: bool) -> u16 {
	let borders = 2;
	let scrollbar = u16::from(needs_scrollbar);
	let symbol = HIGHLIGHT_SYMBOL.chars().count() as u16;
	area.width
		.saturating_sub(borders)
		.saturating_sub(scrollbar)
		.saturating_sub(symbol)
		.saturating_sub(ICON_COLUMN_WIDTH)
		.saturating_sub(TABLE_COLUMN_SPACING)
}
