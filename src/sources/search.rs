use serde_json::Value;

use super::{JsonClient, Result};
use crate::state::{Category, SearchResult};

/// Path of the search endpoint, relative to the API base URL.
pub const SEARCH_PATH: &str = "/api/search/";

/// Default number of results requested per query.
pub const DEFAULT_LIMIT: u32 = 20;

/// What: Build the query parameters for one search request.
///
/// Inputs:
/// - `term`: Raw term, sent as-is in `q`.
/// - `category`: Active chip; `All` maps to an empty `type`.
/// - `limit`: Maximum number of rows.
///
/// Output:
/// - `[("q", term), ("type", ..), ("limit", ..)]` in that order.
#[must_use]
pub fn search_params(term: &str, category: Category, limit: u32) -> Vec<(String, String)> {
    vec![
        ("q".to_string(), term.to_string()),
        ("type".to_string(), category.as_type_param().to_string()),
        ("limit".to_string(), limit.to_string()),
    ]
}

/// What: Extract validated results from a search response body.
///
/// Inputs:
/// - `body`: Decoded JSON response.
///
/// Output:
/// - Rows of `results` that carry an id and a known type, in server order.
///
/// Details:
/// - A missing or non-array `results` field yields an empty list rather than an error.
/// - Rows that fail validation are skipped and logged at debug level.
#[must_use]
pub fn parse_results(body: &Value) -> Vec<SearchResult> {
    let Some(rows) = body.get("results").and_then(Value::as_array) else {
        if body.get("results").is_some() {
            tracing::debug!("search response `results` is not an array; treating as empty");
        }
        return Vec::new();
    };
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<SearchResult>(row.clone()) {
            Ok(item) => items.push(item),
            Err(e) => tracing::debug!(error = %e, "skipping malformed search row"),
        }
    }
    items
}

/// What: Run one search against the LMS API.
///
/// Inputs:
/// - `client`: Injected JSON client.
/// - `term`: Non-blank term.
/// - `category`: Active chip.
/// - `limit`: Maximum number of rows.
///
/// Output:
/// - `Ok(results)` on success; `Err` on transport, status or decoding failure.
///
/// # Errors
/// - Propagates any error returned by `client.get_json`.
pub async fn fetch_results(
    client: &dyn JsonClient,
    term: &str,
    category: Category,
    limit: u32,
) -> Result<Vec<SearchResult>> {
    let body = client
        .get_json(SEARCH_PATH.to_string(), search_params(term, category, limit))
        .await?;
    Ok(parse_results(&body))
}
