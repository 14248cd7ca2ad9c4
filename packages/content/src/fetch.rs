//! Fetching CMS nodes by site path.
//!
//! One outbound GET per call, no retries and no cache. The outcome carries
//! the revalidation window so the HTTP layer in front of the site can cache
//! rendered pages.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::config::ContentConfig;
use crate::error::{ContentError, Result};
use crate::http::create_client;
use crate::types::ContentNode;

/// Result of looking up a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// The node, or `None` when absent or the CMS answered with an error.
    pub data: Option<ContentNode>,
    /// Upstream HTTP status (404 for empty payloads).
    pub status: u16,
    /// How long the rendered result may be served before revalidating.
    pub revalidate: Duration,
}

impl FetchOutcome {
    #[must_use]
    pub fn found(node: ContentNode, status: u16, revalidate: Duration) -> Self {
        Self {
            data: Some(node),
            status,
            revalidate,
        }
    }

    #[must_use]
    pub fn not_found(revalidate: Duration) -> Self {
        Self::status(StatusCode::NOT_FOUND.as_u16(), revalidate)
    }

    /// Outcome for an upstream status without a payload.
    #[must_use]
    pub fn status(status: u16, revalidate: Duration) -> Self {
        Self {
            data: None,
            status,
            revalidate,
        }
    }

    /// Check if the node does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.data.is_none() && self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

/// A source of CMS nodes, enabling mocking in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Look up the node published at `path`.
    ///
    /// Every HTTP answer is an `Ok` outcome; `Err` is reserved for transport
    /// failures and undecodable payloads.
    async fn fetch_by_path(&self, path: &str) -> Result<FetchOutcome>;
}

/// Normalize a site path for lookup. `""` and `"/"` both mean the home page.
///
/// # Examples
/// ```
/// use campus_content::fetch::normalize_path;
///
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("/"), "/");
/// assert_eq!(normalize_path("/about"), "/about");
/// ```
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Decode a CMS payload into a node.
///
/// Blank bodies, `null`, `{}` and `[]` are "no content". An array payload
/// yields its first node.
pub fn decode_node(body: &str) -> Result<Option<ContentNode>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => first,
            None => return Ok(None),
        },
        other => other,
    };

    match &value {
        Value::Null => Ok(None),
        Value::Object(fields) if fields.is_empty() => Ok(None),
        _ => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// CMS client reading nodes over HTTP.
///
/// NOTE: construct once and share; the inner client pools connections.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    http: Client,
    endpoint: Url,
    revalidate: Duration,
}

impl HttpContentSource {
    pub fn new(config: &ContentConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint_url())
            .map_err(|e| ContentError::Config(format!("invalid content endpoint: {e}")))?;

        Ok(Self {
            http: create_client(config.timeout)?,
            endpoint,
            revalidate: config.revalidate,
        })
    }

    fn request_url(&self, path: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("path", path);
        url
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch_by_path(&self, path: &str) -> Result<FetchOutcome> {
        let path = normalize_path(path);
        let url = self.request_url(path);
        tracing::debug!(path, %url, "fetching content");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ContentError::Fetch {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(path, "content not found");
            return Ok(FetchOutcome::not_found(self.revalidate));
        }

        // Other failures are surfaced as-is; the caller decides what to show
        if !status.is_success() {
            tracing::warn!(path, status = %status, "CMS returned an error status");
            return Ok(FetchOutcome::status(status.as_u16(), self.revalidate));
        }

        let body = response.text().await.map_err(|source| ContentError::Fetch {
            path: path.to_string(),
            source,
        })?;

        match decode_node(&body)? {
            Some(node) => {
                tracing::debug!(path, status = status.as_u16(), "content fetched");
                Ok(FetchOutcome::found(node, status.as_u16(), self.revalidate))
            }
            None => {
                tracing::debug!(path, "empty payload, treating as not found");
                Ok(FetchOutcome::not_found(self.revalidate))
            }
        }
    }
}

/// Test utilities for code that consumes a [`ContentSource`].
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// Canned answer for one path.
    #[derive(Debug, Clone)]
    pub enum MockResponse {
        Node(ContentNode),
        Status(u16),
        /// A body the decoder rejects, surfacing as `Err`.
        Malformed,
    }

    /// In-memory content source. Unknown paths answer 404.
    #[derive(Debug, Default)]
    pub struct MockContentSource {
        responses: HashMap<String, MockResponse>,
        requests: Mutex<Vec<String>>,
    }

    impl MockContentSource {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_node(mut self, path: &str, node: ContentNode) -> Self {
            self.responses
                .insert(path.to_string(), MockResponse::Node(node));
            self
        }

        #[must_use]
        pub fn with_status(mut self, path: &str, status: u16) -> Self {
            self.responses
                .insert(path.to_string(), MockResponse::Status(status));
            self
        }

        #[must_use]
        pub fn with_malformed(mut self, path: &str) -> Self {
            self.responses
                .insert(path.to_string(), MockResponse::Malformed);
            self
        }

        /// Normalized paths requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests
                .lock()
                .map(|r| r.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl ContentSource for MockContentSource {
        async fn fetch_by_path(&self, path: &str) -> Result<FetchOutcome> {
            let path = normalize_path(path);
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(path.to_string());
            }

            let revalidate = Duration::from_secs(crate::config::REVALIDATE_SECS);
            match self.responses.get(path) {
                Some(MockResponse::Node(node)) => Ok(FetchOutcome::found(node.clone(), 200, revalidate)),
                Some(MockResponse::Status(status)) => Ok(FetchOutcome::status(*status, revalidate)),
                Some(MockResponse::Malformed) => decode_node("{not json")
                    .map(|_| FetchOutcome::not_found(revalidate)),
                None => Ok(FetchOutcome::not_found(revalidate)),
            }
        }
    }
}
