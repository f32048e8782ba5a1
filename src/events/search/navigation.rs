use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{Activation, activate_selected, cycle_category, escape, move_down, move_up};
use crate::state::{AppState, QueryInput};

/// What: Handle Escape.
///
/// Output:
/// - `true` (quit) when the box was already unfocused with the panel closed.
///
/// Details:
/// - Otherwise the panel closes and the input loses focus; the term is kept.
pub(super) const fn handle_escape(app: &mut AppState) -> bool {
    if !app.input_focused && !app.panel_open {
        return true;
    }
    escape(app);
    false
}

/// What: Handle keys that operate on the result list rather than the term.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable state.
/// - `query_tx`: Channel to the search worker (activation clears the term).
///
/// Output:
/// - `true` when the key was consumed.
///
/// Details:
/// - Down/Up move the selection over the flattened visible list.
/// - Enter activates the selected row; without a selection it does nothing.
/// - Tab/Shift+Tab cycle the category chips.
pub(super) fn handle_navigation_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Down => {
            app.panel_open = true;
            move_down(app);
        }
        KeyCode::Up => move_up(app),
        KeyCode::Enter => {
            if let Some(outcome) = activate_selected(app, query_tx)
                && outcome == Activation::Ignored
            {
                tracing::debug!("enter on a result without navigation target");
            }
        }
        KeyCode::Tab => cycle_category(app, true, query_tx),
        KeyCode::BackTab => cycle_category(app, false, query_tx),
        _ => return false,
    }
    true
}
