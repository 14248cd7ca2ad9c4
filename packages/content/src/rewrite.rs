//! Rewriting CMS-relative links and image paths in rich text.
//!
//! The CMS editor emits uploads as root-relative paths (for example
//! `/sites/default/files/brochure.pdf`) which only resolve on the CMS host.
//! The rewriter makes those absolute so they work on the public site.
//!
//! Rewriting streams the fragment through `lol_html`, so only the matched
//! attributes change. Everything else (attribute order, quoting, entities,
//! unclosed tags) comes out exactly as the editor wrote it.

use lol_html::{element, HtmlRewriter, Settings};

use crate::config::ContentConfig;
use crate::error::Result;
use crate::resolve::resolve;

/// Elements carrying a rewritable URL: `a[href]` and `img[src]`.
const REWRITE_TARGETS: &str = "a[href], img[src]";

/// Rewrites matching `href`/`src` attributes to absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRewriter {
    origin: String,
    match_prefix: String,
    anchor_class: Option<String>,
}

impl LinkRewriter {
    /// Create a rewriter for paths starting with `match_prefix`.
    #[must_use]
    pub fn new(origin: impl Into<String>, match_prefix: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            match_prefix: match_prefix.into(),
            anchor_class: None,
        }
    }

    /// Create a rewriter for the configured origin and files prefix.
    #[must_use]
    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(config.origin.clone(), config.files_prefix.clone())
    }

    /// Set a class on every rewritten anchor, replacing any class the
    /// author gave it.
    #[must_use]
    pub fn with_anchor_class(mut self, class: impl Into<String>) -> Self {
        self.anchor_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn match_prefix(&self) -> &str {
        &self.match_prefix
    }

    /// Rewrite a fragment.
    ///
    /// Never fails: if the rewriter rejects the input, the fragment is
    /// returned unchanged and the error is logged.
    #[must_use]
    pub fn rewrite(&self, fragment: &str) -> String {
        match self.try_rewrite(fragment) {
            Ok((html, rewritten)) => {
                tracing::debug!(rewritten, prefix = %self.match_prefix, "rewrote editor links");
                html
            }
            Err(e) => {
                tracing::warn!(error = %e, "link rewriting failed, keeping editor HTML as-is");
                fragment.to_string()
            }
        }
    }

    /// Rewrite a fragment, returning the HTML and the number of URLs changed.
    pub fn try_rewrite(&self, fragment: &str) -> Result<(String, usize)> {
        let mut rewritten = 0usize;
        let mut output = Vec::with_capacity(fragment.len());

        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![element!(REWRITE_TARGETS, |el| {
                    let is_anchor = el.tag_name().eq_ignore_ascii_case("a");
                    let attr = if is_anchor { "href" } else { "src" };
                    let Some(value) = el.get_attribute(attr) else {
                        return Ok(());
                    };
                    if !value.starts_with(&self.match_prefix) {
                        return Ok(());
                    }

                    el.set_attribute(attr, &resolve(&value, &self.origin))?;
                    if let (true, Some(class)) = (is_anchor, &self.anchor_class) {
                        el.set_attribute("class", class)?;
                    }
                    rewritten += 1;
                    Ok(())
                })],
                // Editor markup is often sloppy; do not bail out on ambiguous input
                strict: false,
                ..Settings::default()
            },
            |c: &[u8]| output.extend_from_slice(c),
        );

        rewriter.write(fragment.as_bytes())?;
        rewriter.end()?;

        Ok((String::from_utf8_lossy(&output).into_owned(), rewritten))
    }
}

/// Rewrite every `<a href>` and `<img src>` starting with `match_prefix`
/// into an absolute URL under `origin`.
///
/// # Examples
/// ```
/// use campus_content::rewrite::rewrite_links;
///
/// let html = r#"<a href="/sites/default/files/a.pdf">A</a>"#;
/// assert_eq!(
///     rewrite_links(html, "/sites/default/files", "https://cms.example.edu"),
///     r#"<a href="https://cms.example.edu/sites/default/files/a.pdf">A</a>"#
/// );
/// ```
#[must_use]
pub fn rewrite_links(fragment: &str, match_prefix: &str, origin: &str) -> String {
    LinkRewriter::new(origin, match_prefix).rewrite(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGIN: &str = "https://cms.example.edu";
    const PREFIX: &str = "/sites/default/files";

    #[test]
    fn test_rewrites_anchor_and_image() {
        let html = concat!(
            r#"<p><a href="/sites/default/files/fees.pdf">Fees</a> "#,
            r#"<img src="/sites/default/files/campus.jpg"></p>"#
        );
        assert_eq!(
            rewrite_links(html, PREFIX, ORIGIN),
            concat!(
                r#"<p><a href="https://cms.example.edu/sites/default/files/fees.pdf">Fees</a> "#,
                r#"<img src="https://cms.example.edu/sites/default/files/campus.jpg"></p>"#
            )
        );
    }

    #[test]
    fn test_leaves_non_matching_links() {
        let html = r#"<a href="/about">About</a><a href="https://example.org/x">X</a><a>none</a>"#;
        assert_eq!(rewrite_links(html, PREFIX, ORIGIN), html);
    }

    #[test]
    fn test_untouched_markup_is_byte_identical() {
        let html = r#"<img src="/logo.png" alt="Logo"><a href='/about' title="A">About&nbsp;us</a><BR/>"#;
        assert_eq!(rewrite_links(html, PREFIX, ORIGIN), html);
    }

    #[test]
    fn test_matched_image_keeps_other_attributes_and_entities() {
        let html = concat!(
            r#"<p>Fees&nbsp;&amp;&nbsp;forms "#,
            r#"<img width="40" src="/sites/default/files/logo.png" alt='Logo'></p>"#
        );
        assert_eq!(
            rewrite_links(html, PREFIX, ORIGIN),
            concat!(
                r#"<p>Fees&nbsp;&amp;&nbsp;forms "#,
                r#"<img width="40" src="https://cms.example.edu/sites/default/files/logo.png" alt='Logo'></p>"#
            )
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let html = r#"<ul><li><a href="/sites/default/files/a.pdf" class="btn">A</a></li></ul><img src="/sites/default/files/b.png">"#;
        let rewriter = LinkRewriter::new(ORIGIN, PREFIX).with_anchor_class("link-primary");
        let once = rewriter.rewrite(html);
        assert_eq!(rewriter.rewrite(&once), once);
    }

    #[test]
    fn test_anchor_class_overrides_existing() {
        let rewriter = LinkRewriter::new(ORIGIN, PREFIX).with_anchor_class("link-primary");
        let out = rewriter.rewrite(r#"<a class="red big" href="/sites/default/files/a.pdf">A</a>"#);
        assert_eq!(
            out,
            r#"<a class="link-primary" href="https://cms.example.edu/sites/default/files/a.pdf">A</a>"#
        );
    }

    #[test]
    fn test_anchor_class_appended_when_missing() {
        let rewriter = LinkRewriter::new(ORIGIN, PREFIX).with_anchor_class("link-primary");
        let out = rewriter.rewrite(r#"<a href="/sites/default/files/a.pdf">A</a>"#);
        assert_eq!(
            out,
            r#"<a href="https://cms.example.edu/sites/default/files/a.pdf" class="link-primary">A</a>"#
        );
    }

    #[test]
    fn test_anchor_class_not_applied_to_unmatched() {
        let rewriter = LinkRewriter::new(ORIGIN, PREFIX).with_anchor_class("link-primary");
        let html = r#"<a href="/contact" class="red">Contact</a>"#;
        assert_eq!(rewriter.rewrite(html), html);
    }

    #[test]
    fn test_try_rewrite_counts() {
        let html = r#"<a href="/sites/default/files/a.pdf">A</a><img src="/sites/default/files/b.png"><img src="/other.png">"#;
        let rewriter = LinkRewriter::new(ORIGIN, PREFIX);
        let (once, count) = rewriter.try_rewrite(html).unwrap();
        assert_eq!(count, 2);
        assert_eq!(rewriter.try_rewrite(&once).unwrap().1, 0);
    }

    #[test]
    fn test_mixed_case_tags_are_matched() {
        let out = rewrite_links(r#"<IMG SRC="/sites/default/files/a.png">"#, PREFIX, ORIGIN);
        assert!(out.contains("https://cms.example.edu/sites/default/files/a.png"));
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        let out = rewrite_links(
            r#"<div><a href="/sites/default/files/x.pdf">unclosed <b>bold"#,
            PREFIX,
            ORIGIN,
        );
        assert_eq!(
            out,
            r#"<div><a href="https://cms.example.edu/sites/default/files/x.pdf">unclosed <b>bold"#
        );
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(rewrite_links("", PREFIX, ORIGIN), "");
    }
}
