//! Error types for content fetching and configuration.
//!
//! Extraction never fails. Rewriting reports errors through
//! `LinkRewriter::try_rewrite` but its callers keep the original HTML.

use thiserror::Error;

/// Main error type for the content library.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// CMS origin is not an absolute http(s) URL.
    #[error("Invalid CMS origin: '{0}'. Expected an absolute http(s) URL (e.g., https://cms.example.edu)")]
    InvalidOrigin(String),

    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a node from the CMS.
    #[error("Failed to fetch content for {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// No node is published at the path.
    #[error("No content found at {0}")]
    NotFound(String),

    /// CMS answered with a non-success status.
    #[error("CMS returned status {status} for {path}")]
    Status { path: String, status: u16 },

    /// CMS payload was not valid node JSON.
    #[error("Failed to decode CMS payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTML rewriter rejected a fragment.
    #[error("HTML rewriting failed: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::InvalidOrigin("cms.local".to_string());
        assert!(err.to_string().contains("cms.local"));
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn test_status_error_display() {
        let err = ContentError::Status {
            path: "/about".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "CMS returned status 503 for /about");
    }

    #[test]
    fn test_config_error_display() {
        let err = ContentError::Config("CMS_ORIGIN not set".into());
        assert_eq!(err.to_string(), "configuration error: CMS_ORIGIN not set");
    }
}
