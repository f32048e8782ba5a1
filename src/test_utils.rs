//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::sources::{JsonClient, Result};
use crate::state::{AppState, ResultDetail, SearchResult};

/// What: Provide a baseline `AppState` for handler tests.
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}

/// Build a course result.
pub fn course(id: u64, title: &str, module_count: Option<u32>) -> SearchResult {
    SearchResult {
        id,
        title: title.to_string(),
        description: None,
        creator: None,
        status: None,
        status_display: None,
        detail: ResultDetail::Course { module_count },
    }
}

/// Build a module result with an optional parent course.
pub fn module(id: u64, title: &str, course_id: Option<u64>) -> SearchResult {
    SearchResult {
        id,
        title: title.to_string(),
        description: None,
        creator: None,
        status: None,
        status_display: None,
        detail: ResultDetail::Module {
            course_id,
            course_title: None,
            element_count: None,
        },
    }
}

/// Build a content result with an optional owning course.
pub fn content(id: u64, title: &str, course_id: Option<u64>) -> SearchResult {
    SearchResult {
        id,
        title: title.to_string(),
        description: None,
        creator: None,
        status: None,
        status_display: None,
        detail: ResultDetail::Content {
            course_id,
            module_id: None,
            course_title: None,
            module_title: None,
            content_type: None,
        },
    }
}

/// Canned reply for one `q` value.
type Reply = (Duration, std::result::Result<Value, String>);

/// What: In-memory [`JsonClient`] keyed by the `q` parameter.
///
/// Details:
/// - Unknown terms answer `{"results": []}` immediately.
/// - Delays use `tokio::time::sleep`, so paused-clock tests stay deterministic.
/// - Every call is recorded for later assertions.
#[derive(Default)]
pub struct FakeClient {
    /// Replies by term.
    replies: HashMap<String, Reply>,
    /// Recorded `(path, params)` pairs.
    calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeClient {
    /// Answer `term` immediately with `body`.
    pub fn respond(self, term: &str, body: Value) -> Self {
        self.respond_after(term, Duration::ZERO, body)
    }

    /// Answer `term` with `body` after `delay`.
    pub fn respond_after(mut self, term: &str, delay: Duration, body: Value) -> Self {
        self.replies.insert(term.to_string(), (delay, Ok(body)));
        self
    }

    /// Fail `term` with `error`.
    pub fn fail(mut self, term: &str, error: &str) -> Self {
        self.replies
            .insert(term.to_string(), (Duration::ZERO, Err(error.to_string())));
        self
    }

    /// Recorded calls in order.
    pub fn calls(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Recorded `q` values in order.
    pub fn queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|(_, params)| {
                params
                    .into_iter()
                    .find(|(k, _)| k == "q")
                    .map(|(_, v)| v)
            })
            .collect()
    }
}

impl JsonClient for FakeClient {
    fn get_json(&self, path: String, params: Vec<(String, String)>) -> BoxFuture<'_, Result<Value>> {
        let term = params
            .iter()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        self.calls.lock().expect("calls lock").push((path, params));
        let (delay, reply) = self
            .replies
            .get(&term)
            .cloned()
            .unwrap_or((Duration::ZERO, Ok(serde_json::json!({"results": []}))));
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            reply.map_err(Into::into)
        })
    }
}
