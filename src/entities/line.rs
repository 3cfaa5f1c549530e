//! Line entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A line entity defined by two endpoints
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point (codes 10/20/30)
    pub start: Coordinate,
    /// End point (codes 11/21/31)
    pub end: Coordinate,
}

impl Line {
    /// Create a new line between two points
    pub fn from_points(start: Coordinate, end: Coordinate) -> Self {
        Line {
            common: EntityCommon::new(),
            start,
            end,
        }
    }
}

impl_entity!(Line, "LINE");
