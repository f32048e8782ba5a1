//! Mouse handling for the search box.
//!
//! Hit-testing uses the rectangles recorded by the last render pass.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{activate, escape, focus, hover, move_down, move_up, set_category, visible_results};
use crate::state::{AppState, QueryInput, Rect4};


/// What: Check if a point is within a rectangle.
///
/// Inputs:
/// - `mx`: Mouse X coordinate (column)
/// - `my`: Mouse Y coordinate (row)
/// - `rect`: Optional rectangle as (x, y, width, height)
///
/// Output:
/// - `true` if point is within rectangle, `false` otherwise
const fn is_point_in_rect(mx: u16, my: u16, rect: Option<Rect4>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
    } else {
        false
    }
}

/// Visible index of the row under the pointer, if any.
fn row_at(app: &AppState, mx: u16, my: u16) -> Option<usize> {
    app.row_rects
        .iter()
        .find(|(_, rect)| is_point_in_rect(mx, my, Some(*rect)))
        .map(|(idx, _)| *idx)
}

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and button
/// - `app`: Mutable search box state (rects, selection, focus)
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - `false`; the mouse never requests exit.
///
/// Details:
/// - Moving over a row selects it, sharing the index with keyboard navigation.
/// - A left click on a row activates it; on a chip it switches category; on the
///   input it focuses the box. A click anywhere else closes the panel.
/// - The wheel moves the selection while the pointer is over the panel.
pub fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    let over_panel = app.panel_open && is_point_in_rect(mx, my, app.panel_rect);
    match m.kind {
        MouseEventKind::Moved if over_panel => {
            if let Some(idx) = row_at(app, mx, my) {
                hover(app, idx);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => handle_left_click(app, mx, my, over_panel, query_tx),
        MouseEventKind::ScrollDown if over_panel => move_down(app),
        MouseEventKind::ScrollUp if over_panel => move_up(app),
        _ => {}
    }
    false
}

/// Route a left click to the input, a chip, a row, or the outside area.
fn handle_left_click(
    app: &mut AppState,
    mx: u16,
    my: u16,
    over_panel: bool,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    if is_point_in_rect(mx, my, app.input_rect) {
        focus(app);
        return;
    }
    if !over_panel {
        escape(app);
        return;
    }
    if let Some(category) = app
        .chip_rects
        .iter()
        .find(|(_, rect)| is_point_in_rect(mx, my, Some(*rect)))
        .map(|(c, _)| *c)
    {
        set_category(app, category, query_tx);
        return;
    }
    if let Some(idx) = row_at(app, mx, my) {
        let Some(result) = visible_results(&app.results, app.category)
            .get(idx)
            .map(|r| (*r).clone())
        else {
            return;
        };
        hover(app, idx);
        let outcome = activate(app, &result, query_tx);
        tracing::debug!(?outcome, index = idx, "mouse activation");
    }
}
