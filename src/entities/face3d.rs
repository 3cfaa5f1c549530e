//! 3D face entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A three- or four-sided face
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face3D {
    /// Common entity data
    pub common: EntityCommon,
    /// Corners from codes 10-13 / 20-23 / 30-33
    pub vertices: Vec<Coordinate>,
}

impl_entity!(Face3D, "3DFACE");
