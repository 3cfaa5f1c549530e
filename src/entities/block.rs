//! Block definition

use super::EntityType;
use crate::tables::TableEntry;
use crate::types::Coordinate;

/// A named, reusable group of entities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Block name (code 2)
    pub name: String,
    /// Base point (codes 10/20)
    pub base_point: Coordinate,
    /// Entities owned by the block, in file order
    pub entities: Vec<EntityType>,
}

impl Block {
    /// Create a new empty block
    pub fn new(name: impl Into<String>, base_point: Coordinate) -> Self {
        Self {
            name: name.into(),
            base_point,
            entities: Vec::new(),
        }
    }
}

impl TableEntry for Block {
    fn name(&self) -> &str {
        &self.name
    }
}
