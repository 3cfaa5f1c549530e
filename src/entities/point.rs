//! Point entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A single point
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    /// Common entity data
    pub common: EntityCommon,
    /// Location (codes 10/20/30)
    pub location: Coordinate,
}

impl_entity!(Point, "POINT");
