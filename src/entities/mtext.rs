//! Multi-line text entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// Multi-line text; `value` keeps the raw inline formatting codes
#[derive(Debug, Clone, PartialEq)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub insertion: Coordinate,
    /// Nominal text height (code 40)
    pub height: f64,
    /// Reference rectangle width (code 41)
    pub width: f64,
    /// Content, concatenated from codes 3 and 1
    pub value: String,
    /// Rotation in degrees (code 50, or derived from the 11/21 direction)
    pub rotation: f64,
    /// Text style name (code 7)
    pub style: Option<String>,
}

impl Default for MText {
    fn default() -> Self {
        MText {
            common: EntityCommon::new(),
            insertion: Coordinate::default(),
            height: 1.0,
            width: 0.0,
            value: String::new(),
            rotation: 0.0,
            style: None,
        }
    }
}

impl_entity!(MText, "MTEXT");
