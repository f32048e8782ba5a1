use tokio::select;
use tokio::time::Interval;

use crate::state::{AppState, Route};
use crate::theme::Settings;

use super::channels::Channels;
use super::handlers::handle_search_event;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for the input thread and search worker
/// - `ticker`: Spinner tick interval
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Waits for and processes a single message from any channel
/// - Ticks only animate the spinner while a search is loading
pub async fn process_channel_messages(
    app: &mut AppState,
    channels: &mut Channels,
    ticker: &mut Interval,
) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.query_tx)
        }
        Some(event) = channels.search_rx.recv() => {
            handle_search_event(app, event);
            false
        }
        _ = ticker.tick() => {
            if app.loading {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            false
        }
    }
}

/// What: Follow a default navigation route.
///
/// Inputs:
/// - `settings`: Provides the web front-end base URL and the browser toggle
/// - `route`: Route produced by activation
///
/// Output:
/// - Full URL when one could be built, `None` otherwise.
///
/// Details:
/// - Always logs the route; opens the browser only when `open_in_browser` is set
///   and `web_base_url` is non-empty.
pub fn follow_route(settings: &Settings, route: &Route) -> Option<String> {
    let path = route.path();
    let Some(url) = crate::util::join_url(&settings.web_base_url, &path) else {
        tracing::info!(path = %path, "navigation requested (no web_base_url configured)");
        return None;
    };
    tracing::info!(url = %url, open = settings.open_in_browser, "navigation requested");
    if settings.open_in_browser {
        crate::util::open_url(&url);
    }
    Some(url)
}
