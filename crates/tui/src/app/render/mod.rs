use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::results::ResultsVisibility;
use crate::components::rows::{ROW_HEIGHT, build_memo_rows};
use crate::components::scrollbar::ScrollMetrics;
use crate::components::tables::title_column_width;
use crate::components::{
	InputContext, MemoTableSpec, ProgressState, render_input, render_memo_table,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_header(frame, layout[0]);

		let progress_text = self.progress_text();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			placeholder: Some(self.ui.filter_label.as_str()),
			area: layout[1],
			theme: &self.style.theme,
		};
		let progress_state = ProgressState {
			progress_text: &progress_text,
			progress_complete: !self.search.is_in_flight(),
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, progress_state);

		match self.results.visibility {
			ResultsVisibility::Populated => self.render_results(frame, layout[2]),
			ResultsVisibility::Empty => self.render_no_results(frame, layout[2]),
			ResultsVisibility::Idle => {}
		}

		self.render_status(frame, layout[3]);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let line = Line::from(vec![
			Span::styled(self.ui.title.as_str(), theme.header),
			Span::styled("  ·  ", theme.muted),
			Span::styled(self.list.label(), theme.muted),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn progress_text(&self) -> String {
		if self.search.is_in_flight() {
			return "searching".to_string();
		}
		match self.results.len() {
			0 => String::new(),
			1 => "1 memo".to_string(),
			count => format!("{count} memos"),
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let inner_height = area.height.saturating_sub(2);
		let viewport_rows = usize::from(inner_height / ROW_HEIGHT);
		self.results.update_scrollbar(viewport_rows);
		let needs_scrollbar = self.results.scroll_metrics.needs_scrollbar;

		let rows = build_memo_rows(
			&self.results.rows,
			&self.ui.secret_placeholder,
			title_column_width(area, needs_scrollbar),
			&self.style.theme,
		);
		let table = MemoTableSpec {
			rows,
			title: None,
			needs_scrollbar,
		};

		render_memo_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			table,
			&self.style.theme,
		);
	}

	fn render_no_results(&mut self, frame: &mut Frame, area: Rect) {
		self.results.scroll_metrics = ScrollMetrics::default();
		if area.height == 0 {
			return;
		}
		let message_area = Rect {
			y: area.y + area.height / 2,
			height: 1,
			..area
		};
		let empty = Paragraph::new(Span::styled(self.ui.no_results.as_str(), self.style.theme.empty))
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let theme = &self.style.theme;
		let line = match &self.status {
			Some(status) => Line::from(Span::styled(status.text(), theme.error)),
			None => Line::from(Span::styled(self.ui.hint.as_str(), theme.muted)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}
