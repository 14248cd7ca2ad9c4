//! Splitting rich text into sections by heading.
//!
//! Two strategies:
//! - keyword-routed: `h1`/`h2` headings whose text contains a keyword route
//!   the HTML that follows them into a [`DepartmentSection`] bucket;
//! - table-anchored: every table becomes a [`GenericSection`] titled by the
//!   nearest heading before it.

use crate::dom::{parse_fragment, Document, NodeExt, NodeKind, NodeRef};
use crate::types::{DepartmentSection, GenericSection};

/// Headings that open and close a keyword-routed section.
const SECTION_HEADINGS: &[&str] = &["h1", "h2"];

/// Deepest heading level that can title a table.
const MAX_TABLE_TITLE_LEVEL: u8 = 5;

/// Destination of a classified heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentBucket {
    Vision,
    Mission,
    Programs,
}

/// Keyword table used to route headings into buckets.
///
/// Headings are matched case-insensitively by substring. Rules are tried in
/// registration order and the first hit wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingClassifier {
    rules: Vec<(String, DepartmentBucket)>,
}

impl HeadingClassifier {
    /// Create a classifier with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule routing headings containing `keyword` to `bucket`.
    #[must_use]
    pub fn rule(mut self, keyword: &str, bucket: DepartmentBucket) -> Self {
        self.rules.push((keyword.to_lowercase(), bucket));
        self
    }

    /// Bucket for a heading's text, if any keyword matches.
    #[must_use]
    pub fn classify(&self, heading: &str) -> Option<DepartmentBucket> {
        let heading = heading.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| heading.contains(keyword.as_str()))
            .map(|(_, bucket)| *bucket)
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::empty()
            .rule("vision", DepartmentBucket::Vision)
            .rule("mission", DepartmentBucket::Mission)
            .rule("programs", DepartmentBucket::Programs)
    }
}

fn bucket_mut(section: &mut DepartmentSection, bucket: DepartmentBucket) -> &mut String {
    match bucket {
        DepartmentBucket::Vision => &mut section.vision,
        DepartmentBucket::Mission => &mut section.mission,
        DepartmentBucket::Programs => &mut section.programs,
    }
}

fn is_section_heading(node: &NodeRef<'_, NodeKind>) -> bool {
    node.element()
        .is_some_and(|el| SECTION_HEADINGS.contains(&el.name()))
}

/// Route the content after each `h1`/`h2` into department buckets.
///
/// A heading owns its following siblings up to the next `h1`/`h2`. When two
/// headings land in the same bucket the later one replaces the earlier.
pub fn department_sections(doc: &Document, classifier: &HeadingClassifier) -> DepartmentSection {
    let mut section = DepartmentSection::default();

    for heading in doc.descendants().filter(is_section_heading) {
        let Some(bucket) = classifier.classify(&heading.text()) else {
            continue;
        };
        let html: String = heading
            .next_siblings()
            .take_while(|n| !is_section_heading(n))
            .map(|n| n.outer_html())
            .collect();
        *bucket_mut(&mut section, bucket) = html.trim().to_string();
    }

    section
}

/// Title for a table: the nearest preceding sibling heading (`h1`-`h5`).
fn table_title(table: NodeRef<'_, NodeKind>) -> Option<String> {
    table.prev_siblings().find_map(|sibling| {
        sibling
            .heading_level()
            .filter(|level| *level <= MAX_TABLE_TITLE_LEVEL)
            .map(|_| sibling.trimmed_text())
    })
}

/// One section per table, titled by the heading before it.
///
/// Fragments with at most one table are returned whole as a single
/// untitled section.
pub fn table_sections(doc: &Document) -> Vec<GenericSection> {
    if doc.is_empty() {
        return Vec::new();
    }
    let tables: Vec<NodeRef<'_, NodeKind>> = doc.elements_by_tag("table").collect();
    if tables.len() <= 1 {
        return vec![GenericSection {
            title: None,
            content: doc.to_html(),
        }];
    }
    tables
        .into_iter()
        .map(|table| GenericSection {
            title: table_title(table),
            content: table.outer_html(),
        })
        .collect()
}

/// Parse a fragment and split it with the default keyword table.
pub fn extract_department_sections(fragment: &str) -> DepartmentSection {
    department_sections(&parse_fragment(fragment), &HeadingClassifier::default())
}

/// Parse a fragment and split it by table.
///
/// Unlike [`table_sections`], a fragment with at most one table comes back
/// byte-for-byte as authored.
pub fn extract_table_sections(fragment: &str) -> Vec<GenericSection> {
    let doc = parse_fragment(fragment);
    if doc.is_empty() {
        return Vec::new();
    }
    if doc.elements_by_tag("table").nth(1).is_none() {
        return vec![GenericSection {
            title: None,
            content: fragment.to_string(),
        }];
    }
    table_sections(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vision_and_mission() {
        let section = extract_department_sections(
            "<h2>Vision</h2><p>To lead.</p><h2>Mission</h2><p>To teach.</p>",
        );
        assert_eq!(
            section,
            DepartmentSection {
                vision: "<p>To lead.</p>".into(),
                mission: "<p>To teach.</p>".into(),
                programs: String::new(),
            }
        );
    }

    #[test]
    fn test_section_collects_until_next_top_heading() {
        let section = extract_department_sections(
            "<h1>Programs Offered</h1><h3>UG</h3><ul><li>B.Tech</li></ul>\n<p>More</p><h2>Contact</h2><p>x</p>",
        );
        assert_eq!(
            section.programs,
            "<h3>UG</h3><ul><li>B.Tech</li></ul>\n<p>More</p>"
        );
        assert_eq!(section.vision, "");
    }

    #[test]
    fn test_section_keeps_attributes_and_entities() {
        let section =
            extract_department_sections("<h2>Vision</h2><p class=\"lead\" id=\"v\">Be &nbsp; first</p>");
        assert_eq!(section.vision, "<p class=\"lead\" id=\"v\">Be &nbsp; first</p>");

        let section = extract_department_sections(
            r#"<h2>Programs</h2><a title="R&amp;D" href="/x">R&amp;D &lt;lab&gt;</a>"#,
        );
        assert_eq!(
            section.programs,
            r#"<a title="R&amp;D" href="/x">R&amp;D &lt;lab&gt;</a>"#
        );
    }

    #[test]
    fn test_unmatched_headings_contribute_nothing() {
        let section = extract_department_sections("<h2>About</h2><p>Hi</p>");
        assert!(section.is_empty());
    }

    #[test]
    fn test_last_matching_heading_wins() {
        let section = extract_department_sections(
            "<h2>Our Vision</h2><p>old</p><h2>VISION 2030</h2><p>new</p>",
        );
        assert_eq!(section.vision, "<p>new</p>");
    }

    #[test]
    fn test_first_keyword_wins_per_heading() {
        let section = extract_department_sections("<h2>Vision and Mission</h2><p>Both</p>");
        assert_eq!(section.vision, "<p>Both</p>");
        assert_eq!(section.mission, "");
    }

    #[test]
    fn test_custom_classifier() {
        let classifier = HeadingClassifier::empty().rule("courses", DepartmentBucket::Programs);
        let doc = parse_fragment("<h2>Courses</h2><p>MBA</p><h2>Programs</h2><p>ignored</p>");
        let section = department_sections(&doc, &classifier);
        assert_eq!(section.programs, "<p>MBA</p>");
    }

    #[test]
    fn test_zero_tables_returns_original() {
        let html = "<h2>Fees</h2><p>Contact the <b>office</b></p>";
        assert_eq!(
            extract_table_sections(html),
            vec![GenericSection {
                title: None,
                content: html.to_string(),
            }]
        );
    }

    #[test]
    fn test_single_table_returns_original() {
        let html = "<h3>Fees</h3><table><tr><td>1</td></tr></table><P>Note";
        let sections = extract_table_sections(html);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[0].content, html);
    }

    #[test]
    fn test_tables_titled_by_preceding_heading() {
        let html = concat!(
            "<h2>Hostel</h2><p>Rates below.</p><table><tr><td>A</td></tr></table>",
            "<table><tr><td>B</td></tr></table>",
            "<h6>Small print</h6><h4>Transport</h4><h6>ignored</h6><table><tr><td>C</td></tr></table>",
        );
        let titles: Vec<_> = extract_table_sections(html)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                Some("Hostel".to_string()),
                Some("Hostel".to_string()),
                Some("Transport".to_string()),
            ]
        );
    }

    #[test]
    fn test_table_title_does_not_search_ancestors() {
        let html = "<h2>Outer</h2><div><table><tr><td>A</td></tr></table></div><table><tr><td>B</td></tr></table>";
        let sections = extract_table_sections(html);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, None);
        assert_eq!(sections[1].title, Some("Outer".to_string()));
        assert_eq!(
            sections[0].content,
            "<table><tbody><tr><td>A</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_empty_and_malformed_input() {
        assert!(extract_department_sections("").is_empty());
        assert!(extract_table_sections("").is_empty());
        assert!(extract_table_sections("  ").is_empty());

        let section = extract_department_sections("<h2>Mission<p>Unclosed heading");
        assert!(section.vision.is_empty());

        let sections = extract_table_sections("<table><tr><td>a<table><tr><td>b");
        assert_eq!(sections.len(), 2);
    }
}
