//! HTML serialization through html5ever's serializer.

use std::io;

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{LocalName, Namespace, QualName};

use super::{Element, NodeKind};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

fn element_name(element: &Element) -> QualName {
    QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(element.name()),
    )
}

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

/// A subtree handed to html5ever.
struct Serializable<'a>(NodeRef<'a, NodeKind>);

impl Serialize for Serializable<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let children_only = matches!(traversal_scope, TraversalScope::ChildrenOnly(_));

        for edge in self.0.traverse() {
            match edge {
                Edge::Open(node) => {
                    if children_only && node.id() == self.0.id() {
                        continue;
                    }
                    match node.value() {
                        NodeKind::Element(element) => {
                            let attrs: Vec<(QualName, &str)> = element
                                .attrs()
                                .map(|(name, value)| (attribute_name(name), value))
                                .collect();
                            serializer.start_elem(
                                element_name(element),
                                attrs.iter().map(|(name, value)| (name, *value)),
                            )?;
                        }
                        NodeKind::Text(text) => serializer.write_text(text)?,
                        NodeKind::Comment(text) => serializer.write_comment(text)?,
                        NodeKind::Fragment => {}
                    }
                }
                Edge::Close(node) => {
                    if children_only && node.id() == self.0.id() {
                        continue;
                    }
                    if let NodeKind::Element(element) = node.value() {
                        serializer.end_elem(element_name(element))?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn to_html(node: NodeRef<'_, NodeKind>, traversal_scope: TraversalScope) -> String {
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    let mut bytes = Vec::new();
    if let Err(e) = serialize(&mut bytes, &Serializable(node), opts) {
        tracing::warn!(error = %e, "HTML serialization stopped early");
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// HTML of `node` including its own tag.
pub(super) fn outer_html(node: NodeRef<'_, NodeKind>) -> String {
    to_html(node, TraversalScope::IncludeNode)
}

/// HTML of the children of `node`.
pub(super) fn inner_html(node: NodeRef<'_, NodeKind>) -> String {
    to_html(node, TraversalScope::ChildrenOnly(None))
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, NodeKind};
    use ego_tree::tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_void_elements_have_no_end_tag() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("p", &[]) => {
                NodeKind::element("img", &[("src", "/a.png")]),
                NodeKind::element("br", &[]),
            },
        }));
        assert_eq!(doc.to_html(), r#"<p><img src="/a.png"><br></p>"#);
    }

    #[test]
    fn test_escaping() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("a", &[("title", r#"say "hi" & <go>"#)]) => {
                NodeKind::text("1 < 2 & 3"),
            },
        }));
        assert_eq!(
            doc.to_html(),
            r#"<a title="say &quot;hi&quot; &amp; <go>">1 &lt; 2 &amp; 3</a>"#
        );
    }

    #[test]
    fn test_script_text_is_raw() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("script", &[]) => { NodeKind::text("if (a < b) {}") },
        }));
        assert_eq!(doc.to_html(), "<script>if (a < b) {}</script>");
    }

    #[test]
    fn test_attribute_order_is_kept() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("img", &[("src", "/a.png"), ("alt", "A"), ("class", "x")]),
        }));
        assert_eq!(doc.to_html(), r#"<img src="/a.png" alt="A" class="x">"#);
    }

    #[test]
    fn test_comment() {
        let mut doc = Document::new();
        doc.tree_mut().root_mut().append(NodeKind::comment(" note "));
        assert_eq!(doc.to_html(), "<!-- note -->");
    }
}
