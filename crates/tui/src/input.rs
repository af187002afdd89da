//! Single-line query input built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Text input holding the memo query.
///
/// The underlying text area is multi-line capable; newline producing keys are
/// swallowed so the query always stays on one line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
	style: Style,
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial` and the cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		let mut input = Self {
			textarea,
			focused: true,
			style: Style::default(),
		};
		input.apply_cursor_style();
		input
	}

	/// Current query text, untrimmed.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query text and move the cursor to its end.
	pub fn set_text(&mut self, text: &str) {
		let (focused, style) = (self.focused, self.style);
		*self = Self::new(text);
		self.set_style(style);
		self.set_focused(focused);
	}

	/// Feed a key into the text area. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Show or hide the cursor depending on whether the input owns focus.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		self.apply_cursor_style();
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Apply the theme's prompt style to the typed text.
	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_style(style);
	}

	/// Render the text area into `area`.
	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_cursor_style(&mut self) {
		let style = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
