use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use super::workers::search::{SearchWorker, SearchWorkerConfig, spawn_search_worker};
use crate::sources::JsonClient;
use crate::state::{QueryInput, SearchEvent};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used for communication
///   between the main event loop, the terminal input thread and the search worker
/// - Owns the search worker handle; dropping `Channels` tears the worker down
pub struct Channels {
    /// Terminal events forwarded by the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Queries for the search worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Events from the search worker.
    pub search_rx: mpsc::UnboundedReceiver<SearchEvent>,
    /// Running search worker.
    pub search_worker: SearchWorker,
}

impl Channels {
    /// What: Create all channels and start the search worker.
    ///
    /// Inputs:
    /// - `client`: JSON client used by the worker
    /// - `config`: Debounce window and result limit
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    ///
    /// Details:
    /// - Must be called from within a tokio runtime.
    pub fn new(client: Arc<dyn JsonClient>, config: SearchWorkerConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (search_tx, search_rx) = mpsc::unbounded_channel::<SearchEvent>();
        let search_worker = spawn_search_worker(query_rx, search_tx, client, config);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            search_rx,
            search_worker,
        }
    }
}
