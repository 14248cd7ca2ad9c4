//! HTML tree used by the extractors.
//!
//! A fragment is parsed once into a [`Document`], an [`ego_tree::Tree`] of
//! [`NodeKind`] values, and queried through [`NodeExt`]. Serialization goes
//! through html5ever's serializer. Trees can also be built by hand with
//! [`ego_tree::tree!`], which keeps extraction independent of the parser.

mod parse;
mod serialize;

pub use ego_tree::{NodeId, NodeRef, Tree};
pub use parse::parse_fragment;

/// An element's lower-cased tag name and its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
}

impl Element {
    #[must_use]
    pub fn new(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing it in place or appending it.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }
}

/// Payload of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The fragment root; never serialized itself.
    Fragment,
    Element(Element),
    Text(String),
    Comment(String),
}

impl NodeKind {
    #[must_use]
    pub fn element(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self::Element(Element::new(name, attrs))
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// A parsed HTML fragment.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree<NodeKind>,
}

impl Document {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Tree::new(NodeKind::Fragment),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeRef<'_, NodeKind> {
        self.tree.root()
    }

    #[must_use]
    pub fn tree(&self) -> &Tree<NodeKind> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree<NodeKind> {
        &mut self.tree
    }

    /// All nodes below the root in document order.
    pub fn descendants(&self) -> impl Iterator<Item = NodeRef<'_, NodeKind>> {
        self.tree.root().descendants().skip(1)
    }

    /// All elements with the given tag name, in document order.
    pub fn elements_by_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeRef<'a, NodeKind>> + 'a {
        self.descendants().filter(move |n| n.has_tag_name(tag))
    }

    /// Check if the fragment has no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.tree.root().has_children()
    }

    /// Serialize the whole fragment back to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.root().inner_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Tree<NodeKind>> for Document {
    fn from(tree: Tree<NodeKind>) -> Self {
        Self { tree }
    }
}

/// HTML queries over tree nodes.
pub trait NodeExt<'a> {
    /// Element payload, `None` for text, comments and the root.
    fn element(&self) -> Option<&'a Element>;

    /// Check if this node is an element with the given (lower-case) tag.
    fn has_tag_name(&self, tag: &str) -> bool;

    /// Heading level for `h1`..`h6`.
    fn heading_level(&self) -> Option<u8>;

    /// Attribute value, or `None` if missing or not an element.
    fn attribute(&self, name: &str) -> Option<&'a str>;

    /// First descendant element with the given tag.
    fn find_descendant(&self, tag: &str) -> Option<NodeRef<'a, NodeKind>>;

    /// Concatenated text of this node and everything below it.
    fn text(&self) -> String;

    /// Text content with surrounding whitespace removed.
    fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    /// HTML of this node including its own tag.
    fn outer_html(&self) -> String;

    /// HTML of this node's children.
    fn inner_html(&self) -> String;
}

impl<'a> NodeExt<'a> for NodeRef<'a, NodeKind> {
    fn element(&self) -> Option<&'a Element> {
        self.value().as_element()
    }

    fn has_tag_name(&self, tag: &str) -> bool {
        self.element().is_some_and(|el| el.name() == tag)
    }

    fn heading_level(&self) -> Option<u8> {
        match self.element()?.name() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element()?.attribute(name)
    }

    fn find_descendant(&self, tag: &str) -> Option<NodeRef<'a, NodeKind>> {
        self.descendants().skip(1).find(|n| n.has_tag_name(tag))
    }

    fn text(&self) -> String {
        self.descendants()
            .filter_map(|n| match n.value() {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn outer_html(&self) -> String {
        serialize::outer_html(*self)
    }

    fn inner_html(&self) -> String {
        serialize::inner_html(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ego_tree::tree;
    use pretty_assertions::assert_eq;

    /// `<div class="box"><h2>Title</h2><p>one <b>two</b></p></div>`
    fn sample() -> Document {
        Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("DIV", &[("class", "box")]) => {
                NodeKind::element("h2", &[]) => { NodeKind::text("Title") },
                NodeKind::element("p", &[]) => {
                    NodeKind::text("one "),
                    NodeKind::element("b", &[]) => { NodeKind::text("two") },
                },
            },
        }))
    }

    fn first<'a>(doc: &'a Document, tag: &'a str) -> NodeRef<'a, NodeKind> {
        doc.elements_by_tag(tag).next().unwrap()
    }

    #[test]
    fn test_hand_built_tree_serializes() {
        assert_eq!(
            sample().to_html(),
            r#"<div class="box"><h2>Title</h2><p>one <b>two</b></p></div>"#
        );
    }

    #[test]
    fn test_descendants_document_order() {
        let doc = sample();
        let tags: Vec<_> = doc
            .descendants()
            .filter_map(|n| n.element().map(Element::name))
            .collect();
        assert_eq!(tags, vec!["div", "h2", "p", "b"]);
    }

    #[test]
    fn test_siblings() {
        let doc = sample();
        let h2 = first(&doc, "h2");
        let p = first(&doc, "p");
        assert_eq!(h2.next_siblings().map(|n| n.id()).collect::<Vec<_>>(), vec![p.id()]);
        assert_eq!(p.prev_siblings().map(|n| n.id()).collect::<Vec<_>>(), vec![h2.id()]);
        assert_eq!(doc.root().prev_siblings().count(), 0);
    }

    #[test]
    fn test_text_and_attributes() {
        let doc = sample();
        let div = first(&doc, "div");
        let p = first(&doc, "p");
        assert_eq!(p.text(), "one two");
        assert_eq!(first(&doc, "h2").heading_level(), Some(2));
        assert_eq!(div.attribute("class"), Some("box"));
        assert_eq!(div.attribute("id"), None);
        assert!(p.ancestors().any(|a| a.id() == div.id()));
        assert_eq!(div.find_descendant("b").map(|b| b.text()), Some("two".to_string()));
    }

    #[test]
    fn test_set_attribute_replaces_and_appends() {
        let mut doc = sample();
        let id = first(&doc, "div").id();
        if let Some(mut node) = doc.tree_mut().get_mut(id) {
            if let Some(el) = node.value().as_element_mut() {
                el.set_attribute("class", "wide");
                el.set_attribute("id", "main");
            }
        }
        assert_eq!(
            first(&doc, "div").outer_html(),
            r#"<div class="wide" id="main"><h2>Title</h2><p>one <b>two</b></p></div>"#
        );
    }

    #[test]
    fn test_serializer_escapes_text_and_keeps_void_elements() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("p", &[("title", "\"quoted\"")]) => {
                NodeKind::text("a < b & c\u{a0}d"),
                NodeKind::element("br", &[]),
            },
            NodeKind::comment(" note "),
        }));
        assert_eq!(
            doc.to_html(),
            r#"<p title="&quot;quoted&quot;">a &lt; b &amp; c&nbsp;d<br></p><!-- note -->"#
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.to_html(), "");
    }
}
