//! Table-row extraction for the placements page.
//!
//! Editors maintain placements as a table whose first row is a header and
//! whose columns follow a fixed order. That order lives in one place,
//! [`PLACEMENT_COLUMNS`], rather than in scattered cell indices.

use crate::dom::{parse_fragment, Document, NodeExt, NodeKind, NodeRef};
use crate::resolve::resolve;
use crate::types::PlacementRecord;

/// A field of [`PlacementRecord`] that a column can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementField {
    Name,
    Package,
    Company,
    Desc,
    Dept,
    Badge,
    /// Filled from the `src` of an `<img>` inside the cell.
    Image,
}

/// Column order of the placements table, by cell index.
pub const PLACEMENT_COLUMNS: [PlacementField; 7] = [
    PlacementField::Name,
    PlacementField::Package,
    PlacementField::Company,
    PlacementField::Desc,
    PlacementField::Dept,
    PlacementField::Badge,
    PlacementField::Image,
];

/// Maps cell positions to record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementSchema {
    columns: Vec<PlacementField>,
}

impl PlacementSchema {
    /// Create a schema where `columns[i]` names the field for cell `i`.
    #[must_use]
    pub fn new(columns: impl Into<Vec<PlacementField>>) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[PlacementField] {
        &self.columns
    }
}

impl Default for PlacementSchema {
    fn default() -> Self {
        Self::new(PLACEMENT_COLUMNS)
    }
}

fn field_mut(record: &mut PlacementRecord, field: PlacementField) -> &mut String {
    match field {
        PlacementField::Name => &mut record.name,
        PlacementField::Package => &mut record.package,
        PlacementField::Company => &mut record.company,
        PlacementField::Desc => &mut record.desc,
        PlacementField::Dept => &mut record.dept,
        PlacementField::Badge => &mut record.badge,
        PlacementField::Image => &mut record.image,
    }
}

/// Absolute URL of the first image in a cell, or empty.
fn cell_image(cell: NodeRef<'_, NodeKind>, origin: &str) -> String {
    cell.find_descendant("img")
        .and_then(|img| img.attribute("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| resolve(src, origin))
        .unwrap_or_default()
}

fn row_cells(row: NodeRef<'_, NodeKind>) -> Vec<NodeRef<'_, NodeKind>> {
    row.children()
        .filter(|cell| cell.has_tag_name("td") || cell.has_tag_name("th"))
        .collect()
}

/// One record per table row, skipping the first (header) row.
///
/// Missing cells leave their field empty.
pub fn placements(doc: &Document, schema: &PlacementSchema, origin: &str) -> Vec<PlacementRecord> {
    doc.elements_by_tag("tr")
        .skip(1)
        .map(|row| {
            let cells = row_cells(row);
            let mut record = PlacementRecord::default();
            for (cell, &field) in cells.iter().zip(schema.columns()) {
                *field_mut(&mut record, field) = match field {
                    PlacementField::Image => cell_image(*cell, origin),
                    _ => cell.trimmed_text(),
                };
            }
            record
        })
        .collect()
}

/// Parse a fragment and extract placement records with the default schema.
pub fn extract_placements(fragment: &str, origin: &str) -> Vec<PlacementRecord> {
    extract_placements_with(fragment, &PlacementSchema::default(), origin)
}

/// Parse a fragment and extract placement records with a custom schema.
pub fn extract_placements_with(
    fragment: &str,
    schema: &PlacementSchema,
    origin: &str,
) -> Vec<PlacementRecord> {
    placements(&parse_fragment(fragment), schema, origin)
}
