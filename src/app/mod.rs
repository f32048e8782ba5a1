//! Search box runtime: terminal lifecycle, event loop and background workers.

/// Runtime event loop and background workers.
pub mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoints so callers keep using `app::run(...)`.
pub use runtime::handlers::handle_search_event;
pub use runtime::workers::search::{SearchWorker, SearchWorkerConfig, spawn_search_worker};
pub use runtime::{run, run_with_client};
