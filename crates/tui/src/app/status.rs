//! Transient error messages shown on the status line.

use std::time::{Duration, Instant};

/// How long a status message stays on screen.
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
	text: String,
	shown_at: Instant,
}

impl StatusMessage {
	pub(crate) fn error(text: String) -> Self {
		Self {
			text,
			shown_at: Instant::now(),
		}
	}

	pub(crate) fn text(&self) -> &str {
		&self.text
	}

	pub(crate) fn is_expired(&self) -> bool {
		self.expired_at(Instant::now())
	}

	fn expired_at(&self, now: Instant) -> bool {
		now.saturating_duration_since(self.shown_at) >= STATUS_TTL
	}
}
