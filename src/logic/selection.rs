//! Keyboard navigator over the flattened visible list.

use crate::logic::filter::visible_len;
use crate::state::{AppState, RowHandle};

/// What: ArrowDown transition.
///
/// Inputs:
/// - `current`: Current selection, `None` when unselected.
/// - `len`: Length of the visible list.
///
/// Output:
/// - `Some(0)` from unselected, `Some(i + 1)` otherwise, clamped to `len - 1`.
///   `None` when the list is empty.
#[must_use]
pub fn step_down(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(i) => Some(i.saturating_add(1).min(len - 1)),
    }
}

/// What: ArrowUp transition.
///
/// Output:
/// - `Some(0)` goes back to unselected; `Some(i)` moves to `i - 1`; unselected stays.
#[must_use]
pub const fn step_up(current: Option<usize>) -> Option<usize> {
    match current {
        None | Some(0) => None,
        Some(i) => Some(i - 1),
    }
}

/// Move the selection one row down in the visible list.
pub fn move_down(app: &mut AppState) {
    let len = visible_len(&app.results, app.category);
    app.selected = step_down(app.selected, len);
}

/// Move the selection one row up, releasing it above the first row.
pub const fn move_up(app: &mut AppState) {
    app.selected = step_up(app.selected);
}

/// What: Select the row under the mouse.
///
/// Details:
/// - Keyboard and mouse share the same index; out-of-range indices are ignored.
pub fn hover(app: &mut AppState, index: usize) {
    if index < visible_len(&app.results, app.category) {
        app.selected = Some(index);
    }
}

/// What: Adjust a scroll offset so a row is fully inside the viewport.
///
/// Inputs:
/// - `scroll`: Current first visible line.
/// - `handle`: Row position recorded by the presenter.
/// - `viewport`: Number of visible lines.
///
/// Output:
/// - New scroll offset; unchanged when the row is already visible.
#[must_use]
pub fn scroll_into_view(scroll: u16, handle: RowHandle, viewport: u16) -> u16 {
    if viewport == 0 {
        return scroll;
    }
    let bottom = handle.line.saturating_add(handle.height);
    if handle.line < scroll {
        handle.line
    } else if bottom > scroll.saturating_add(viewport) {
        bottom.saturating_sub(viewport)
    } else {
        scroll
    }
}
