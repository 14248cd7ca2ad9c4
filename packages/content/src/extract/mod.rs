//! Structured data extraction from rich-text fragments.
//!
//! Each extractor comes in two forms: one over a parsed [`Document`] (so
//! callers can run several passes over a single parse, and tests can use
//! hand-built trees) and an `extract_*` convenience form over a fragment
//! string. None of them fail; empty or unparseable input yields empty
//! results.
//!
//! [`Document`]: crate::dom::Document

mod lists;
mod placements;
mod sections;

pub use lists::{extract_link_list, extract_marquee, link_list, marquee_items};
pub use placements::{
    extract_placements, extract_placements_with, placements, PlacementField, PlacementSchema,
    PLACEMENT_COLUMNS,
};
pub use sections::{
    department_sections, extract_department_sections, extract_table_sections, table_sections,
    DepartmentBucket, HeadingClassifier,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, NodeKind};
    use ego_tree::tree;
    use pretty_assertions::assert_eq;

    /// Extractors work on trees that never went through the parser.
    #[test]
    fn test_hand_built_tree() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("ul", &[]) => {
                NodeKind::element("li", &[]) => {
                    NodeKind::element("a", &[("href", "/notice.pdf")]) => {
                        NodeKind::text(" Notice "),
                    },
                },
            },
        }));

        let links = link_list(&doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Notice");
        assert_eq!(marquee_items(&doc), vec!["Notice"]);
    }

    #[test]
    fn test_hand_built_department() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("h2", &[]) => { NodeKind::text("Mission") },
            NodeKind::element("p", &[("class", "lead")]) => { NodeKind::text("Serve") },
        }));

        let section = department_sections(&doc, &HeadingClassifier::default());
        assert_eq!(section.mission, r#"<p class="lead">Serve</p>"#);
    }

    #[test]
    fn test_hand_built_placements() {
        let doc = Document::from(tree!(NodeKind::Fragment => {
            NodeKind::element("table", &[]) => {
                NodeKind::element("tr", &[]) => {
                    NodeKind::element("th", &[]) => { NodeKind::text("Name") },
                },
                NodeKind::element("tr", &[]) => {
                    NodeKind::element("td", &[]) => { NodeKind::text("Asha") },
                    NodeKind::text(" "),
                    NodeKind::element("td", &[]) => { NodeKind::text("9 LPA") },
                },
            },
        }));

        let records = placements(&doc, &PlacementSchema::default(), "https://cms.example.edu");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[0].package, "9 LPA");
    }
}
