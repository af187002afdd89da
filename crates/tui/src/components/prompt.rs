use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

const PROMPT_SYMBOL: &str = "› ";
/// Columns kept free between the typed query and the progress indicator.
const PROGRESS_GAP: u16 = 2;

/// Everything the prompt row needs to draw the query input.
pub struct InputContext<'a> {
	pub search_input: &'a QueryInput<'a>,
	/// Shown dimmed while the query is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Right-hand side of the prompt row: a spinner while a lookup runs and a
/// short status such as the match count.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt symbol, the query input and the right-aligned progress
/// indicator on one row.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;

	if area.width == 0 || area.height == 0 {
		return;
	}

	let symbol_width = (PROMPT_SYMBOL.width() as u16).min(area.width);
	let symbol_area = Rect {
		width: symbol_width,
		height: 1,
		..area
	};
	frame.render_widget(Span::styled(PROMPT_SYMBOL, theme.prompt), symbol_area);

	let input_area = Rect {
		x: area.x + symbol_width,
		width: area.width - symbol_width,
		height: 1,
		..area
	};
	search_input.render(frame, input_area);

	let query_width = search_input.text().width() as u16;
	if query_width == 0
		&& let Some(text) = placeholder
		&& input_area.width > 1
	{
		// Column 0 belongs to the cursor.
		let placeholder_area = Rect {
			x: input_area.x + 1,
			width: input_area.width - 1,
			..input_area
		};
		frame.render_widget(Span::styled(text, theme.empty), placeholder_area);
	}

	render_progress(frame, input_area, query_width, progress, theme);
}

fn render_progress(
	frame: &mut Frame,
	area: Rect,
	query_width: u16,
	progress: ProgressState<'_>,
	theme: &Theme,
) {
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;
	if progress_text.is_empty() && progress_complete {
		return;
	}

	let mut spans = Vec::with_capacity(2);
	if !progress_complete {
		let spinner = Throbber::default()
			.style(theme.muted)
			.throbber_style(theme.muted);
		spans.push(spinner.to_symbol_span(throbber_state));
	}
	spans.push(Span::styled(progress_text, theme.muted));
	let line = Line::from(spans);

	let line_width = line.width() as u16;
	let earliest = area.x.saturating_add(query_width).saturating_add(PROGRESS_GAP);
	let start = area.right().saturating_sub(line_width).max(earliest);
	if line_width == 0 || start >= area.right() {
		return;
	}

	let progress_area = Rect {
		x: start,
		width: area.right() - start,
		..area
	};
	frame.render_widget(line, progress_area);
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn row_text(query: &str, placeholder: Option<&str>, progress_text: &str, complete: bool) -> String {
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
		let input = QueryInput::new(query);
		let throbber = ThrobberState::default();
		let theme = Theme::default();
		terminal
			.draw(|frame| {
				let area = frame.area();
				render_input(
					frame,
					InputContext {
						search_input: &input,
						placeholder,
						area,
						theme: &theme,
					},
					ProgressState {
						progress_text,
						progress_complete: complete,
						throbber_state: &throbber,
					},
				);
			})
			.unwrap();
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, 0)].symbol().to_string())
			.collect()
	}

	#[test]
	fn placeholder_shows_only_for_an_empty_query() {
		let empty = row_text("", Some("Search by title"), "", true);
		assert!(empty.starts_with("›  Search by title"));

		let typed = row_text("trip", Some("Search by title"), "", true);
		assert!(typed.starts_with("› trip"));
		assert!(!typed.contains("Search by title"));
	}

	#[test]
	fn progress_text_is_right_aligned() {
		let row = row_text("trip", None, "3 memos", true);
		assert!(row.trim_end().ends_with("3 memos"));
		assert!(row.ends_with("3 memos"));
	}
}
