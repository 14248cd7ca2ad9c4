//! Core data types: the CMS node payload and the records derived from its
//! rich-text field.

use serde::{Deserialize, Serialize};

/// A CMS content record addressed by its site path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(default)]
    pub title: String,

    /// Short descriptive text shown under the title.
    #[serde(default)]
    pub details: String,

    /// Rich-text HTML authored in the CMS editor.
    #[serde(default)]
    pub editor: String,

    /// Image URLs attached to the node, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

/// An anchor found inside a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub title: String,
    pub href: String,
}

/// Plain text of one list item, shown in a scrolling announcement bar.
pub type MarqueeItem = String;

/// One student placement, taken from a table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub name: String,
    pub package: String,
    pub company: String,
    pub desc: String,
    pub dept: String,
    pub badge: String,
    /// Absolute image URL, or empty when the row has no image.
    pub image: String,
}

/// Department overview split by heading.
///
/// Each field holds raw HTML, empty when the fragment had no matching
/// heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSection {
    pub vision: String,
    pub mission: String,
    pub programs: String,
}

impl DepartmentSection {
    /// Check if no heading matched any bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vision.is_empty() && self.mission.is_empty() && self.programs.is_empty()
    }
}

/// A table together with the heading that introduces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericSection {
    pub title: Option<String>,
    pub content: String,
}
