//! Turning CMS-relative paths into absolute URLs.

use regex::Regex;
use std::sync::LazyLock;

/// URI scheme at the start of a reference (RFC 3986 `scheme ":"`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("valid regex"));

/// Check whether a path already denotes an absolute URL.
///
/// Protocol-relative references (`//host/...`) count as absolute.
///
/// # Examples
/// ```
/// use campus_content::resolve::is_absolute;
///
/// assert!(is_absolute("https://cdn.example.edu/a.png"));
/// assert!(is_absolute("mailto:office@example.edu"));
/// assert!(!is_absolute("/sites/default/files/a.png"));
/// ```
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("//") || SCHEME_PATTERN.is_match(path)
}

/// Resolve a CMS path against the configured origin.
///
/// Absolute URLs come back unchanged, root-relative paths are prefixed with
/// `origin`, and the empty path resolves to the origin itself. Any other
/// relative path is passed through as-is.
///
/// # Examples
/// ```
/// use campus_content::resolve::resolve;
///
/// let origin = "https://cms.example.edu";
/// assert_eq!(resolve("/docs/a.pdf", origin), "https://cms.example.edu/docs/a.pdf");
/// assert_eq!(resolve("https://other.edu/x", origin), "https://other.edu/x");
/// assert_eq!(resolve("", origin), origin);
/// ```
pub fn resolve(path: &str, origin: &str) -> String {
    if path.is_empty() {
        return origin.to_string();
    }
    if is_absolute(path) {
        return path.to_string();
    }
    if path.starts_with('/') {
        return format!("{origin}{path}");
    }
    // TODO: decide whether document-relative paths should resolve against the page URL.
    path.to_string()
}
