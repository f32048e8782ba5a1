use crate::state::{AppState, SearchEvent};

/// What: Apply a search worker event to the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `event`: Event emitted by the search worker
///
/// Details:
/// - Events whose id differs from `latest_query_id` are stale and dropped, so
///   a slow reply for an earlier term can never replace a fresher result set.
/// - `Dispatched` raises the loading flag.
/// - `Completed` replaces the result set wholesale; `Failed` empties it. Both
///   clear the loading flag and reset selection and scroll.
pub fn handle_search_event(app: &mut AppState, event: SearchEvent) {
    if event.id() != app.latest_query_id {
        tracing::debug!(
            id = event.id(),
            latest = app.latest_query_id,
            "dropping stale search event"
        );
        return;
    }
    match event {
        SearchEvent::Dispatched { .. } => {
            app.loading = true;
        }
        SearchEvent::Completed { items, .. } => {
            app.results = items;
            app.loading = false;
            app.selected = None;
            app.scroll = 0;
        }
        SearchEvent::Failed { error, .. } => {
            tracing::debug!(error = %error, "showing empty results after failed search");
            app.results.clear();
            app.loading = false;
            app.selected = None;
            app.scroll = 0;
        }
    }
}
