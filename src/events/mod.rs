//! Event handling layer for the search box.
//!
//! Keyboard input goes to `search`, mouse input to `mouse`. Both only
//! mutate [`AppState`] through the `logic` layer and publish queries on
//! `query_tx`.

use crossterm::event::{Event as CEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

mod mouse;
mod search;

pub use mouse::handle_mouse_event;
pub use search::handle_search_key;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_search_key(*ke, app, query_tx)
        }
        CEvent::Mouse(m) => handle_mouse_event(*m, app, query_tx),
        _ => false,
    }
}
