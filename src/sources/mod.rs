//! Network data retrieval: the injected JSON client and the search endpoint.

use futures::future::BoxFuture;
use serde_json::Value;

mod http;
mod search;

/// Crate-wide fallible result used at I/O boundaries.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Minimal read-only HTTP JSON interface used by the search worker.
///
/// Details:
/// - Injected as `Arc<dyn JsonClient>` so tests can substitute a fake.
/// - `params` are sent as URL query parameters in the given order.
/// - Implementations must fail on transport errors, non-2xx statuses and
///   bodies that are not JSON.
pub trait JsonClient: Send + Sync {
    /// Issue `GET <base><path>?<params>` and decode the body as JSON.
    fn get_json(&self, path: String, params: Vec<(String, String)>) -> BoxFuture<'_, Result<Value>>;
}

pub use http::HttpClient;
pub use search::{DEFAULT_LIMIT, SEARCH_PATH, fetch_results, parse_results, search_params};
