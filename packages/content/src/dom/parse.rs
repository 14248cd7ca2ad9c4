//! Tolerant fragment parsing via html5ever (through `scraper`).

use ego_tree::NodeRef;
use scraper::{Html, Node as HtmlNode};

use super::{Document, NodeId, NodeKind};

/// Parse an HTML fragment into an owned [`Document`].
///
/// Never fails: html5ever recovers from unclosed tags, stray end tags and
/// mixed-case names the way browsers do. Recovered errors are only logged.
///
/// # Examples
/// ```
/// use campus_content::dom::parse_fragment;
///
/// let doc = parse_fragment("<UL><li>One<li>Two</UL>");
/// assert_eq!(doc.elements_by_tag("li").count(), 2);
/// ```
pub fn parse_fragment(html: &str) -> Document {
    let mut doc = Document::new();
    if html.trim().is_empty() {
        return doc;
    }

    let parsed = Html::parse_fragment(html);
    if !parsed.errors.is_empty() {
        tracing::debug!(
            errors = parsed.errors.len(),
            "recovered from malformed HTML"
        );
    }

    // parse_fragment wraps the content in a synthetic <html> element
    let wrapper = parsed.root_element();
    let root = doc.root().id();
    let mut stack: Vec<(NodeRef<'_, HtmlNode>, NodeId)> =
        wrapper.children().map(|child| (child, root)).collect();
    stack.reverse();

    while let Some((source, parent)) = stack.pop() {
        let Some(kind) = copy_node(source.value()) else {
            continue;
        };
        let Some(mut parent_node) = doc.tree_mut().get_mut(parent) else {
            continue;
        };
        let id = parent_node.append(kind).id();
        let mut children: Vec<_> = source.children().map(|child| (child, id)).collect();
        children.reverse();
        stack.extend(children);
    }

    doc
}

/// Convert one parsed node.
///
/// Doctypes and processing instructions have no place in a fragment and are
/// dropped.
fn copy_node(node: &HtmlNode) -> Option<NodeKind> {
    match node {
        HtmlNode::Element(element) => {
            let attrs: Vec<(&str, &str)> = element.attrs().collect();
            Some(NodeKind::element(element.name(), &attrs))
        }
        HtmlNode::Text(text) => Some(NodeKind::text(&**text)),
        HtmlNode::Comment(comment) => Some(NodeKind::comment(&**comment)),
        _ => None,
    }
}
