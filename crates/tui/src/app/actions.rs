use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::Focus;
use crate::navigation::NavigationRequest;

impl<'a> App<'a> {
	/// Process a keyboard event and return a navigation request when the
	/// screen is done.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<NavigationRequest>> {
		if is_back(&key) {
			return Ok(Some(self.on_back()));
		}

		match self.focus {
			Focus::Query => self.handle_query_key(key),
			Focus::Results => Ok(self.handle_results_key(key)),
		}
	}

	/// Leave the search screen.
	#[must_use]
	pub fn on_back(&self) -> NavigationRequest {
		NavigationRequest::back()
	}

	/// Open the memo shown at `index`.
	#[must_use]
	pub fn on_row_selected(&self, index: usize) -> Option<NavigationRequest> {
		self.results
			.rows
			.get(index)
			.map(|row| NavigationRequest::read_memo(row.memo.id))
	}

	fn handle_query_key(&mut self, key: KeyEvent) -> Result<Option<NavigationRequest>> {
		match key.code {
			KeyCode::Enter => self.on_search_pressed(),
			KeyCode::Down | KeyCode::Tab if self.results.list_visible() => {
				self.set_focus(Focus::Results);
			}
			KeyCode::Tab => {}
			_ => {
				if self.search_input.input(key) {
					self.on_query_changed();
				}
			}
		}
		Ok(None)
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Option<NavigationRequest> {
		match key.code {
			KeyCode::Enter => {
				return self.results.selected().and_then(|index| self.on_row_selected(index));
			}
			KeyCode::Up => {
				if !self.results.select_previous() {
					self.set_focus(Focus::Query);
				}
			}
			KeyCode::Down => self.results.select_next(),
			KeyCode::PageUp => self.results.page_up(),
			KeyCode::PageDown => self.results.page_down(),
			KeyCode::Home => self.results.select_first(),
			KeyCode::End => self.results.select_last(),
			KeyCode::Char(' ' | 'f') if is_plain(&key) => {
				if let Some(index) = self.results.selected() {
					self.on_favorite_toggled(index);
				}
			}
			KeyCode::Tab | KeyCode::Char('/') => self.set_focus(Focus::Query),
			KeyCode::Char(_) if is_plain(&key) => {
				self.set_focus(Focus::Query);
				if self.search_input.input(key) {
					self.on_query_changed();
				}
			}
			_ => {}
		}
		None
	}
}

fn is_back(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Esc => true,
		KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

fn is_plain(key: &KeyEvent) -> bool {
	!key
		.modifiers
		.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
