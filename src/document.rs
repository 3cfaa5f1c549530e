//! Parsed DXF document structure

use crate::entities::{Block, EntityType};
use crate::notification::NotificationCollection;
use crate::tables::{Table, Tables};
use crate::types::{Coordinate, DxfVersion, Units};

/// Header variables read from the HEADER section.
///
/// Every field is optional: `None` means the variable was not in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    /// `$ACADVER` version string, e.g. `AC1015`
    pub version: Option<String>,
    /// `$INSUNITS` code
    pub insertion_units: Option<i32>,
    /// `$EXTMIN` lower drawing extent
    pub extents_min: Option<Coordinate>,
    /// `$EXTMAX` upper drawing extent
    pub extents_max: Option<Coordinate>,
    /// `$DWGCODEPAGE` code page name
    pub code_page: Option<String>,
}

impl Header {
    /// Parsed `$ACADVER`
    pub fn dxf_version(&self) -> Option<DxfVersion> {
        self.version.as_deref().map(DxfVersion::from_version_string)
    }

    /// Parsed `$INSUNITS`
    pub fn units(&self) -> Option<Units> {
        self.insertion_units.map(Units::from_code)
    }
}

/// Structural model of one DXF file.
///
/// Built once per read; the converter treats it as read-only context.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    /// Header variables
    pub header: Header,
    /// Layer, line type and style tables
    pub tables: Tables,
    /// Block definitions by name
    pub blocks: Table<Block>,
    /// Top-level entities in file order
    pub entities: Vec<EntityType>,
    /// Diagnostics collected while reading
    pub notifications: NotificationCollection,
}

impl DxfDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a block definition (case-insensitive)
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    /// Iterate over the top-level entities
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let doc = DxfDocument::new();
        assert!(doc.entities().next().is_none());
        assert!(doc.block("anything").is_none());
        assert!(doc.header.dxf_version().is_none());
    }

    #[test]
    fn test_block_lookup_case_insensitive() {
        let mut doc = DxfDocument::new();
        doc.blocks.insert(Block::new("Door", Coordinate::new(0.0, 0.0)));
        assert!(doc.block("DOOR").is_some());
    }
}
