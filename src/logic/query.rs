//! Input controller: term edits, category changes and focus.

use tokio::sync::mpsc;

use crate::state::{AppState, Category, QueryInput};

/// What: Publish the current `(term, category)` pair to the search worker.
///
/// Inputs:
/// - `app`: Mutable state; its id counter advances.
/// - `query_tx`: Channel to the debounced search worker.
///
/// Output: None.
///
/// Details:
/// - Every call takes a fresh id and records it as `latest_query_id`, which
///   makes any event for an older query stale.
/// - A blank term clears results and loading synchronously; it is still sent
///   so the worker drops any pending timer, but the worker never fetches it.
/// - Selection is reset because the visible list is about to change.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.selected = None;
    app.scroll = 0;
    if app.term_is_blank() {
        app.results.clear();
        app.loading = false;
    }
    let _ = query_tx.send(QueryInput {
        id,
        text: app.input.clone(),
        category: app.category,
    });
}

/// Record a term edit and re-query.
fn on_input_changed(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.panel_open = true;
    send_query(app, query_tx);
}

/// Append a typed character to the term.
pub fn push_char(app: &mut AppState, ch: char, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.input.push(ch);
    on_input_changed(app, query_tx);
}

/// Remove the last character of the term; no-op on an empty term.
pub fn pop_char(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if app.input.pop().is_some() {
        on_input_changed(app, query_tx);
    }
}

/// What: Replace the whole term.
///
/// Inputs:
/// - `app`: Mutable state.
/// - `text`: New term; empty is valid.
/// - `query_tx`: Channel to the search worker.
///
/// Details:
/// - No validation is applied. Setting the current value again is a no-op.
pub fn set_input(app: &mut AppState, text: &str, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if app.input == text {
        return;
    }
    app.input = text.to_string();
    on_input_changed(app, query_tx);
}

/// What: Clear the term without reopening the panel.
///
/// Details:
/// - Used after activation, which closes the panel itself.
pub fn clear_input(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    app.input.clear();
    send_query(app, query_tx);
}

/// What: Switch the active category chip.
///
/// Inputs:
/// - `app`: Mutable state.
/// - `category`: Chip to activate.
/// - `query_tx`: Channel to the search worker.
///
/// Details:
/// - Selection resets on every actual change.
/// - A non-blank term is re-queried with the new server-side filter.
pub fn set_category(
    app: &mut AppState,
    category: Category,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    if app.category == category {
        return;
    }
    app.category = category;
    app.selected = None;
    app.scroll = 0;
    if !app.term_is_blank() {
        send_query(app, query_tx);
    }
}

/// Move to the next (`forward`) or previous chip.
pub fn cycle_category(
    app: &mut AppState,
    forward: bool,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let next = if forward {
        app.category.next()
    } else {
        app.category.prev()
    };
    set_category(app, next, query_tx);
}

/// Focus the input and open the results panel.
pub const fn focus(app: &mut AppState) {
    app.input_focused = true;
    app.panel_open = true;
}

/// Close the results panel and release input focus, keeping the term.
pub const fn escape(app: &mut AppState) {
    app.panel_open = false;
    app.input_focused = false;
}
