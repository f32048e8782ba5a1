use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};
use crate::theme::Settings;

/// What: Mount the search box from loaded settings.
///
/// Inputs:
/// - `settings`: Resolved settings (config file merged with CLI overrides)
/// - `initial_query`: Optional term to search for right away
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Initialized `AppState`
///
/// Details:
/// - An initial query focuses the input and goes through the normal debounce path.
pub fn initialize_app_state(
    settings: &Settings,
    initial_query: Option<&str>,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> AppState {
    let mut app = AppState::new(settings.search_box_config());
    if let Some(q) = initial_query.filter(|q| !q.trim().is_empty()) {
        crate::logic::focus(&mut app);
        crate::logic::set_input(&mut app, q, query_tx);
        tracing::info!(query = %q, "starting with initial query");
    }
    app
}
