//! Rendering of the search box: input line and the results panel below it.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

pub mod results;
mod search_input;

/// Height of the bordered input box.
const INPUT_HEIGHT: u16 = 3;

/// What: Render one frame of the search box.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Search box state; render rectangles and scroll are updated in place.
///
/// Output: None.
///
/// Details:
/// - Clears every recorded rectangle first so mouse hit-testing never sees
///   geometry from a previous frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    app.input_rect = None;
    app.panel_rect = None;
    app.chip_rects.clear();
    app.row_rects.clear();
    app.row_handles.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
        .split(area);
    search_input::render_input(f, app, chunks[0]);
    if app.panel_open {
        results::render_panel(f, app, chunks[1]);
    }
}

/// Convert a ratatui [`Rect`] into the tuple form kept in state.
pub(crate) const fn rect4(r: Rect) -> crate::state::Rect4 {
    (r.x, r.y, r.width, r.height)
}
