//! Configuration for the CMS connection, loaded once at start-up.

use std::time::Duration;

use url::Url;

use crate::error::{ContentError, Result};

/// Default lookup endpoint on the CMS, relative to the origin.
pub const DEFAULT_CONTENT_ENDPOINT: &str = "/api/content";

/// Relative prefix the CMS editor uses for uploaded files.
pub const DEFAULT_FILES_PREFIX: &str = "/sites/default/files";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Cache-validity window for fetched nodes, in seconds.
pub const REVALIDATE_SECS: u64 = 60;

/// Connection settings for the CMS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Base URL of the CMS, without trailing slash.
    pub origin: String,
    /// Path of the node lookup endpoint.
    pub endpoint: String,
    /// Prefix of editor links that should be made absolute.
    pub files_prefix: String,
    pub timeout: Duration,
    pub revalidate: Duration,
}

impl ContentConfig {
    /// Load configuration from environment variables.
    ///
    /// `CMS_ORIGIN` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let origin = std::env::var("CMS_ORIGIN")
            .map_err(|_| ContentError::Config("CMS_ORIGIN not set".into()))?;

        let mut config = Self::new(&origin)?;

        if let Ok(endpoint) = std::env::var("CMS_CONTENT_ENDPOINT") {
            config = config.with_endpoint(endpoint);
        }

        if let Ok(prefix) = std::env::var("CMS_FILES_PREFIX") {
            config = config.with_files_prefix(prefix);
        }

        let timeout_secs = std::env::var("CMS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(HTTP_TIMEOUT_SECS);

        let revalidate_secs = std::env::var("CMS_REVALIDATE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(REVALIDATE_SECS);

        Ok(config
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_revalidate(Duration::from_secs(revalidate_secs)))
    }

    /// Create a config for the given origin with default settings.
    pub fn new(origin: &str) -> Result<Self> {
        Ok(Self {
            origin: normalize_origin(origin)?,
            endpoint: DEFAULT_CONTENT_ENDPOINT.to_string(),
            files_prefix: DEFAULT_FILES_PREFIX.to_string(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            revalidate: Duration::from_secs(REVALIDATE_SECS),
        })
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = if endpoint.starts_with('/') {
            endpoint
        } else {
            format!("/{endpoint}")
        };
        self
    }

    #[must_use]
    pub fn with_files_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.files_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    /// Full URL of the node lookup endpoint.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.origin, self.endpoint)
    }
}

/// Validate a CMS origin and strip its trailing slash.
///
/// # Examples
/// ```
/// use campus_content::config::normalize_origin;
///
/// assert_eq!(normalize_origin("https://cms.example.edu/").unwrap(), "https://cms.example.edu");
/// assert!(normalize_origin("cms.example.edu").is_err());
/// ```
pub fn normalize_origin(origin: &str) -> Result<String> {
    let trimmed = origin.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|_| ContentError::InvalidOrigin(origin.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ContentError::InvalidOrigin(origin.to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_origin_strips_trailing_slash() {
        assert_eq!(
            normalize_origin("https://cms.example.edu/").unwrap(),
            "https://cms.example.edu"
        );
        assert_eq!(
            normalize_origin("http://localhost:8080//").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_normalize_origin_invalid() {
        assert!(normalize_origin("").is_err());
        assert!(normalize_origin("cms.example.edu").is_err());
        assert!(normalize_origin("ftp://cms.example.edu").is_err());
        assert!(normalize_origin("/relative").is_err());
    }

    #[test]
    fn test_new_defaults() {
        let config = ContentConfig::new("https://cms.example.edu").unwrap();
        assert_eq!(config.endpoint, DEFAULT_CONTENT_ENDPOINT);
        assert_eq!(config.files_prefix, DEFAULT_FILES_PREFIX);
        assert_eq!(config.revalidate, Duration::from_secs(60));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_endpoint_adds_leading_slash() {
        let config = ContentConfig::new("https://cms.example.edu")
            .unwrap()
            .with_endpoint("jsonapi/node");
        assert_eq!(config.endpoint_url(), "https://cms.example.edu/jsonapi/node");
    }
}
