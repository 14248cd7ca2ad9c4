//! List-based extraction: link lists and marquee items.

use crate::dom::{parse_fragment, Document, NodeExt, NodeKind, NodeRef};
use crate::types::{LinkRecord, MarqueeItem};

/// Placeholder href for anchors without one.
const MISSING_HREF: &str = "#";

fn inside_list_item(node: &NodeRef<'_, NodeKind>) -> bool {
    node.ancestors().any(|a| a.has_tag_name("li"))
}

/// Every anchor nested in a list item, with its trimmed text and literal
/// `href`. URLs are not resolved here.
pub fn link_list(doc: &Document) -> Vec<LinkRecord> {
    doc.elements_by_tag("a")
        .filter(inside_list_item)
        .map(|a| LinkRecord {
            title: a.trimmed_text(),
            href: a.attribute("href").unwrap_or(MISSING_HREF).to_string(),
        })
        .collect()
}

/// Trimmed text of every list item, nested ones included.
pub fn marquee_items(doc: &Document) -> Vec<MarqueeItem> {
    doc.elements_by_tag("li").map(|li| li.trimmed_text()).collect()
}

/// Parse a fragment and extract its link list.
///
/// # Examples
/// ```
/// use campus_content::extract::extract_link_list;
///
/// let links = extract_link_list(r#"<ul><li><a href="/docs/a.pdf">Doc A</a></li></ul>"#);
/// assert_eq!(links[0].title, "Doc A");
/// assert_eq!(links[0].href, "/docs/a.pdf");
/// ```
pub fn extract_link_list(fragment: &str) -> Vec<LinkRecord> {
    link_list(&parse_fragment(fragment))
}

/// Parse a fragment and extract its marquee items.
pub fn extract_marquee(fragment: &str) -> Vec<MarqueeItem> {
    marquee_items(&parse_fragment(fragment))
}
