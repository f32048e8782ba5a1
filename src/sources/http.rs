//! reqwest-backed [`JsonClient`].

use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::Value;

use super::{JsonClient, Result};

/// HTTP client bound to the LMS API base URL.
///
/// Connection pooling is enabled by default in `reqwest::Client`, so one
/// instance is shared by every fetch the worker spawns.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// Base URL without trailing slash, e.g. `http://localhost:8000`.
    base_url: String,
    /// Pooled reqwest client.
    inner: reqwest::Client,
}

impl HttpClient {
    /// What: Build a client for `base_url` with the given request timeout.
    ///
    /// Inputs:
    /// - `base_url`: Scheme and authority of the LMS API; a trailing `/` is ignored.
    /// - `timeout`: Upper bound for a whole request.
    ///
    /// Output:
    /// - `Ok(HttpClient)`; `Err` when the TLS backend cannot be initialised.
    ///
    /// # Errors
    /// - Returns `Err` when `reqwest::Client::builder().build()` fails.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(5)))
            .timeout(timeout)
            .user_agent(format!("lms-search/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            inner,
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl JsonClient for HttpClient {
    fn get_json(&self, path: String, params: Vec<(String, String)>) -> BoxFuture<'_, Result<Value>> {
        Box::pin(async move {
            let url =
                reqwest::Url::parse_with_params(&format!("{}{path}", self.base_url), &params)?;
            tracing::debug!(url = %url, "GET");
            let resp = self.inner.get(url).send().await?.error_for_status()?;
            let body = resp.json::<Value>().await?;
            Ok(body)
        })
    }
}
