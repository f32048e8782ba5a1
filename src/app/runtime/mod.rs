use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::{HttpClient, JsonClient};
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
pub mod channels;
mod event_loop;
pub mod handlers;
mod init;
pub mod workers;

use background::spawn_event_thread;
use channels::Channels;
use event_loop::{follow_route, process_channel_messages};
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Spinner animation period.
const TICK_MS: u64 = 120;

/// What: Run the search box end-to-end against the configured LMS API.
///
/// Inputs:
/// - `settings`: Resolved settings (API base URL, debounce window, limit, UI config)
/// - `initial_query`: Optional term to search for on start
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// # Errors
/// - Returns `Err` when the HTTP client or the terminal cannot be set up.
pub async fn run(settings: Settings, initial_query: Option<String>) -> Result<()> {
    let client = HttpClient::new(
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    tracing::info!(base_url = %client.base_url(), "search client ready");
    run_with_client(settings, Arc::new(client), initial_query).await
}

/// What: Run the search box with an injected JSON client.
///
/// Inputs:
/// - `settings`: Resolved settings
/// - `client`: JSON client used for every search
/// - `initial_query`: Optional term to search for on start
///
/// Output:
/// - `Ok(())` on clean exit.
///
/// # Errors
/// - Returns `Err` when terminal setup fails.
///
/// Details:
/// - Event loop: renders a frame, then handles one keyboard/mouse event,
///   search worker event or spinner tick.
/// - After each step a pending navigation route is followed.
/// - Teardown stops the input thread and the search worker (pending timer and
///   in-flight fetches included) before restoring the terminal.
/// - `LMS_SEARCH_TEST_HEADLESS=1` skips raw TTY setup and rendering.
pub async fn run_with_client(
    settings: Settings,
    client: Arc<dyn JsonClient>,
    initial_query: Option<String>,
) -> Result<()> {
    let headless = std::env::var("LMS_SEARCH_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut channels = Channels::new(client, settings.worker_config());
    let mut app = initialize_app_state(&settings, initial_query.as_deref(), &channels.query_tx);

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }
        if process_channel_messages(&mut app, &mut channels, &mut ticker).await {
            break;
        }
        if let Some(route) = app.pending_route.take() {
            let _ = follow_route(&settings, &route);
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    let Channels { search_worker, .. } = channels;
    search_worker.shutdown();
    if !headless {
        restore_terminal()?;
    }
    tracing::info!("search box closed");
    Ok(())
}
