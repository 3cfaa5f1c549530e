//! Circle entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A full circle
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Coordinate,
    /// Radius (code 40)
    pub radius: f64,
}

impl_entity!(Circle, "CIRCLE");
