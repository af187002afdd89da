//! UI building blocks shared across rendering and state modules.

/// Input prompt rendering and progress display.
pub mod prompt;
/// Memo row construction.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Bordered memo table rendering.
pub mod tables;

pub use prompt::{InputContext, ProgressState, render_input};
pub use rows::{MemoRow, build_memo_rows};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use tables::{MemoTableSpec, render_memo_table};
