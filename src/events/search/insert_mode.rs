use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::{focus, pop_char, push_char, set_input};
use crate::state::{AppState, QueryInput};

/// What: Apply an editing key to the focused input.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable state.
/// - `query_tx`: Channel to the search worker.
///
/// Details:
/// - Characters with Control or Alt held are shortcuts, never text.
/// - Ctrl+U clears the whole term.
pub(super) fn handle_edit_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let shortcut = ke
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match ke.code {
        KeyCode::Char('u') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            set_input(app, "", query_tx);
        }
        KeyCode::Char(ch) if !shortcut => push_char(app, ch, query_tx),
        KeyCode::Backspace => pop_char(app, query_tx),
        _ => {}
    }
}

/// What: Handle a key while the input does not hold focus.
///
/// Output:
/// - Always `false`; quitting is handled by the caller.
///
/// Details:
/// - A plain character focuses the input and is typed into it.
/// - Tab and Enter only focus the input, reopening the panel.
pub(super) fn handle_unfocused_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let shortcut = ke
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match ke.code {
        KeyCode::Char(ch) if !shortcut => {
            focus(app);
            push_char(app, ch, query_tx);
        }
        KeyCode::Tab | KeyCode::Enter => focus(app),
        _ => {}
    }
    false
}
