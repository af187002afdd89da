//! Scripted repository and helpers shared by the screen tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use memo_search_core::{Memo, MemoList, MemoRepository, RepositoryError, Result, SearchFilter};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::App;

/// In-memory repository that records every call it receives.
#[derive(Default)]
pub(crate) struct ScriptedRepository {
	memos: Mutex<Vec<Memo>>,
	pub searches: Mutex<Vec<(String, SearchFilter)>>,
	pub favorite_calls: Mutex<Vec<(i64, bool)>>,
	delays: Mutex<HashMap<String, Duration>>,
	favorite_delay: Mutex<Option<Duration>>,
	pub fail_searches: AtomicBool,
	pub fail_favorites: AtomicBool,
}

impl ScriptedRepository {
	pub fn with_memos(memos: Vec<Memo>) -> Arc<Self> {
		let repo = Self::default();
		*repo.memos.lock().unwrap() = memos;
		Arc::new(repo)
	}

	/// Make lookups for exactly `query` take `delay`.
	pub fn delay(&self, query: &str, delay: Duration) {
		self.delays.lock().unwrap().insert(query.to_string(), delay);
	}

	/// Make every favorite update take `delay` before it is stored.
	pub fn delay_favorites(&self, delay: Duration) {
		*self.favorite_delay.lock().unwrap() = Some(delay);
	}

	pub fn search_queries(&self) -> Vec<String> {
		self.searches
			.lock()
			.unwrap()
			.iter()
			.map(|(query, _)| query.clone())
			.collect()
	}

	pub fn stored(&self, memo_id: i64) -> Option<Memo> {
		self.memos
			.lock()
			.unwrap()
			.iter()
			.find(|memo| memo.id == memo_id)
			.cloned()
	}
}

impl MemoRepository for ScriptedRepository {
	fn search_by_title_or_text(&self, query: &str, filter: SearchFilter) -> Result<Vec<Memo>> {
		self.searches
			.lock()
			.unwrap()
			.push((query.to_string(), filter));
		let delay = self.delays.lock().unwrap().get(query).copied();
		if let Some(delay) = delay {
			thread::sleep(delay);
		}
		if self.fail_searches.load(Ordering::SeqCst) {
			return Err(RepositoryError::Unavailable("database locked".into()));
		}

		let needle = query.to_lowercase();
		let mut memos: Vec<Memo> = self
			.memos
			.lock()
			.unwrap()
			.iter()
			.filter(|memo| {
				memo.title.to_lowercase().contains(&needle)
					|| memo.text.to_lowercase().contains(&needle)
			})
			.filter(|memo| filter.favorites_only.is_none_or(|flag| memo.is_favorite == flag))
			.filter(|memo| filter.category_id.is_none_or(|id| memo.category_id == id))
			.cloned()
			.collect();
		memos.sort_by(|a, b| b.id.cmp(&a.id));
		Ok(memos)
	}

	fn set_favorite(&self, memo_id: i64, value: bool) -> Result<()> {
		self.favorite_calls.lock().unwrap().push((memo_id, value));
		let delay = *self.favorite_delay.lock().unwrap();
		if let Some(delay) = delay {
			thread::sleep(delay);
		}
		if self.fail_favorites.load(Ordering::SeqCst) {
			return Err(RepositoryError::Unavailable("read-only".into()));
		}
		let mut memos = self.memos.lock().unwrap();
		let memo = memos
			.iter_mut()
			.find(|memo| memo.id == memo_id)
			.ok_or(RepositoryError::NotFound(memo_id))?;
		memo.is_favorite = value;
		Ok(())
	}

	fn memo(&self, memo_id: i64) -> Result<Option<Memo>> {
		Ok(self.stored(memo_id))
	}
}

pub(crate) fn memo(id: i64, title: &str) -> Memo {
	Memo {
		id,
		title: title.to_string(),
		text: String::new(),
		is_secret: false,
		is_favorite: false,
		category_id: 0,
	}
}

/// A small collection covering secret, favorite and categorised memos.
pub(crate) fn sample_memos() -> Vec<Memo> {
	vec![
		Memo {
			text: "pack sunscreen".into(),
			category_id: 3,
			..memo(1, "Trip to Busan")
		},
		Memo {
			is_favorite: true,
			..memo(2, "Groceries for the trip")
		},
		Memo {
			text: "trip wire 1234".into(),
			is_secret: true,
			is_favorite: true,
			category_id: 3,
			..memo(3, "Bank pin")
		},
		Memo {
			is_favorite: true,
			..memo(4, "Book list")
		},
	]
}

pub(crate) fn app_for(repo: &Arc<ScriptedRepository>, list: MemoList) -> App<'static> {
	App::new(repo.clone(), list)
}

/// Pump worker responses until `done` holds or a second passes.
pub(crate) fn pump_until(app: &mut App, mut done: impl FnMut(&App) -> bool) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while !done(app) && Instant::now() < deadline {
		thread::sleep(Duration::from_millis(5));
		app.pump_memo_responses();
	}
	app.pump_memo_responses();
}

/// Wait for the current search and all favorite updates to settle.
pub(crate) fn settle(app: &mut App) {
	pump_until(app, |app| {
		!app.search.is_in_flight() && app.pending_favorite_count() == 0
	});
}

/// Type `query` into the input and react as an edit would.
pub(crate) fn type_query(app: &mut App, query: &str) {
	app.search_input.set_text(query);
	app.on_query_changed();
}

/// Render the screen into a test terminal and return its text, one line per
/// terminal row.
pub(crate) fn render(app: &mut App, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	let buffer = terminal.backend().buffer();
	let mut text = String::new();
	for y in 0..buffer.area.height {
		for x in 0..buffer.area.width {
			text.push_str(buffer[(x, y)].symbol());
		}
		text.push('\n');
	}
	text
}
