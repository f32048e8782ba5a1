//! Keyboard handling for the search box.
//!
//! The module is split into:
//! - `insert_mode`: Term editing (characters, Backspace, Ctrl+U)
//! - `navigation`: Result navigation, activation, chips and Escape

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

mod insert_mode;
mod navigation;


/// What: Handle a key press for the search box.
///
/// Inputs:
/// - `ke`: Key event received from the terminal
/// - `app`: Mutable search box state
/// - `query_tx`: Channel to the debounced search worker
///
/// Output:
/// - `true` to request application exit; otherwise `false`.
///
/// Details:
/// - Ctrl+C always quits. Escape quits only once the box is already unfocused
///   and closed; otherwise it closes the panel.
/// - While unfocused, typing a character focuses the input and edits the term;
///   navigation keys are ignored until the input is focused again.
/// - Arrow keys never move an editing caret; they only move the selection.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c')) {
        return true;
    }
    if ke.code == KeyCode::Esc {
        return navigation::handle_escape(app);
    }
    if !app.input_focused {
        return insert_mode::handle_unfocused_key(ke, app, query_tx);
    }
    if navigation::handle_navigation_key(ke, app, query_tx) {
        return false;
    }
    insert_mode::handle_edit_key(ke, app, query_tx);
    false
}
