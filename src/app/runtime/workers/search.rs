use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    task::{JoinHandle, JoinSet},
    time::{Duration, sleep},
};

use crate::sources::{self, JsonClient};
use crate::state::{QueryInput, SearchEvent};

/// Tuning for the search worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchWorkerConfig {
    /// Quiescence window before a query is dispatched.
    pub debounce: Duration,
    /// `limit` parameter sent with every query.
    pub limit: u32,
}

impl Default for SearchWorkerConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            limit: sources::DEFAULT_LIMIT,
        }
    }
}

/// What: Handle to the running search worker.
///
/// Details:
/// - Dropping the handle (or calling [`SearchWorker::shutdown`]) aborts the
///   worker task. That cancels a pending debounce timer and, because the
///   in-flight fetches live in the worker's `JoinSet`, aborts them too, so no
///   event is produced after teardown.
#[derive(Debug)]
pub struct SearchWorker {
    /// Worker task.
    handle: JoinHandle<()>,
}

impl SearchWorker {
    /// Stop the worker and every fetch it started.
    pub fn shutdown(self) {
        drop(self);
    }

    /// Whether the worker task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// What: Spawn background worker for search queries.
///
/// Inputs:
/// - `query_rx`: Channel receiver for search queries
/// - `event_tx`: Channel sender for dispatch/result/failure events
/// - `client`: Injected JSON client
/// - `config`: Debounce window and result limit
///
/// Output:
/// - Handle that cancels the worker when dropped.
///
/// Details:
/// - Debounces queries: each new query restarts the window; only the last one
///   of a burst is dispatched.
/// - Blank terms supersede pending queries but never hit the network.
/// - Each dispatch runs in its own task so a slow reply never blocks the next
///   query; replies carry the query id and stale ones are dropped by the
///   handler.
/// - Failures are logged here and reported as `SearchEvent::Failed`.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
    client: Arc<dyn JsonClient>,
    config: SearchWorkerConfig,
) -> SearchWorker {
    let handle = tokio::spawn(async move {
        let mut in_flight: JoinSet<()> = JoinSet::new();
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            loop {
                select! {
                    Some(new_q) = query_rx.recv() => { latest = new_q; }
                    () = sleep(config.debounce) => { break; }
                }
            }
            if latest.text.trim().is_empty() {
                tracing::debug!(id = latest.id, "blank query; nothing to fetch");
                continue;
            }
            while in_flight.try_join_next().is_some() {}

            let QueryInput { id, text, category } = latest;
            tracing::info!(id, query = %text, ?category, "dispatching search");
            let _ = event_tx.send(SearchEvent::Dispatched { id });
            let tx = event_tx.clone();
            let client = Arc::clone(&client);
            in_flight.spawn(async move {
                let event = match sources::fetch_results(&*client, &text, category, config.limit)
                    .await
                {
                    Ok(items) => {
                        tracing::info!(id, count = items.len(), "search results received");
                        SearchEvent::Completed { id, items }
                    }
                    Err(e) => {
                        tracing::warn!(id, query = %text, error = %e, "search request failed");
                        SearchEvent::Failed {
                            id,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(event);
            });
        }
    });
    SearchWorker { handle }
}
