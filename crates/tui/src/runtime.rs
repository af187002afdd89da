//! Application runtime and event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use memo_search_core::{MemoList, MemoRepository, ResultOrdering};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use crate::App;
use crate::navigation::NavigationRequest;

/// Open the search screen for `list` and run it until the user leaves.
pub fn run(
	repository: Arc<dyn MemoRepository>,
	list: MemoList,
	ordering: ResultOrdering,
) -> Result<NavigationRequest> {
	let mut app = App::with_ordering(repository, list, ordering);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the screen produces a navigation
	/// request.
	pub fn run(&mut self) -> Result<NavigationRequest> {
		let mut terminal = ratatui::init();
		clear_or_restore(&mut terminal, ratatui::restore)?;
		info!(list = %self.list, ordering = %self.search.ordering(), "search screen opened");

		self.hydrate_initial_results();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<NavigationRequest> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_request = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(request)) => {
							maybe_request = Some(request);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(request) = maybe_request {
				break Ok(request);
			}

			self.pump_memo_responses();
			self.expire_status();
			self.throbber_state.calc_next();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(request) = &result {
			debug!(%request, "search screen closed");
		}
		result
	}
}

/// Clear the screen for the first frame, handing the terminal back through
/// `restore` when that fails.
fn clear_or_restore<B: Backend>(terminal: &mut Terminal<B>, restore: impl FnOnce()) -> Result<()> {
	if let Err(err) = terminal.clear() {
		restore();
		return Err(err.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cell::Cell as Flag;
	use std::io;

	use ratatui::backend::{ClearType, TestBackend, WindowSize};
	use ratatui::buffer::Cell;
	use ratatui::layout::{Position, Size};

	use super::*;

	/// Test backend whose clear always fails.
	struct UnclearableBackend(TestBackend);

	impl Backend for UnclearableBackend {
		fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
		where
			I: Iterator<Item = (u16, u16, &'a Cell)>,
		{
			self.0.draw(content)
		}

		fn hide_cursor(&mut self) -> io::Result<()> {
			self.0.hide_cursor()
		}

		fn show_cursor(&mut self) -> io::Result<()> {
			self.0.show_cursor()
		}

		fn get_cursor_position(&mut self) -> io::Result<Position> {
			self.0.get_cursor_position()
		}

		fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
			self.0.set_cursor_position(position)
		}

		fn clear(&mut self) -> io::Result<()> {
			Err(io::Error::other("terminal went away"))
		}

		fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
			Err(io::Error::other("terminal went away"))
		}

		fn size(&self) -> io::Result<Size> {
			self.0.size()
		}

		fn window_size(&mut self) -> io::Result<WindowSize> {
			self.0.window_size()
		}

		fn flush(&mut self) -> io::Result<()> {
			self.0.flush()
		}
	}

	#[test]
	fn failed_clear_restores_the_terminal() {
		let mut terminal = Terminal::new(UnclearableBackend(TestBackend::new(20, 4))).unwrap();
		let restored = Flag::new(false);

		let error = clear_or_restore(&mut terminal, || restored.set(true)).unwrap_err();
		assert!(restored.get());
		assert!(error.to_string().contains("terminal went away"));
	}

	#[test]
	fn successful_clear_keeps_the_terminal() {
		let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
		let restored = Flag::new(false);

		clear_or_restore(&mut terminal, || restored.set(true)).unwrap();
		assert!(!restored.get());
	}
}
