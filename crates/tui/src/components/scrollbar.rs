//! Scrollbar for the memo list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scroll geometry of the memo list, measured in memo rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Rows in the list.
	pub content_length: usize,
	/// Rows that fit in the viewport.
	pub viewport_len: usize,
	/// Largest valid table offset.
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// An empty list or a zero-height viewport yields default metrics.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar,
		}
	}

	/// Map a table offset onto the scrollbar track.
	#[must_use]
	pub fn scrollbar_position(&self, scroll: usize) -> usize {
		match self.max_scroll {
			0 => 0,
			max => scroll.min(max) * self.content_length.saturating_sub(1) / max,
		}
	}
}

/// Draw the scrollbar in the rightmost column of `area` and return the rest.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let track = Rect {
		x: area.right().saturating_sub(1),
		width: 1.min(area.width),
		..area
	};
	frame.render_stateful_widget(scrollbar, track, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_content_needs_no_scrollbar() {
		assert_eq!(ScrollMetrics::compute(0, 10), ScrollMetrics::default());
		assert_eq!(ScrollMetrics::compute(10, 0), ScrollMetrics::default());
	}

	#[test]
	fn overflowing_content_maps_offsets_onto_the_track() {
		let metrics = ScrollMetrics::compute(20, 5);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.max_scroll, 15);
		assert_eq!(metrics.scrollbar_position(0), 0);
		assert_eq!(metrics.scrollbar_position(15), 19);
		assert_eq!(metrics.scrollbar_position(40), 19);
	}

	#[test]
	fn fitting_content_stays_at_the_top() {
		let metrics = ScrollMetrics::compute(3, 5);
		assert!(!metrics.needs_scrollbar);
		assert_eq!(metrics.viewport_len, 3);
		assert_eq!(metrics.scrollbar_position(2), 0);
	}
}
