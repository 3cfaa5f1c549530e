//! Arc entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A circular arc; angles are in degrees, counter-clockwise
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Coordinate,
    /// Radius (code 40)
    pub radius: f64,
    /// Start angle in degrees (code 50)
    pub start_angle: f64,
    /// End angle in degrees (code 51)
    pub end_angle: f64,
}

impl Default for Arc {
    fn default() -> Self {
        Arc {
            common: EntityCommon::new(),
            center: Coordinate::default(),
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }
}

impl_entity!(Arc, "ARC");
