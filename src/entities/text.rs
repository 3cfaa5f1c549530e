//! Single-line text entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub insertion: Coordinate,
    /// Text height (code 40)
    pub height: f64,
    /// Content (code 1)
    pub value: String,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Text style name (code 7)
    pub style: Option<String>,
}

impl Default for Text {
    fn default() -> Self {
        Text {
            common: EntityCommon::new(),
            insertion: Coordinate::default(),
            height: 1.0,
            value: String::new(),
            rotation: 0.0,
            style: None,
        }
    }
}

impl_entity!(Text, "TEXT");
