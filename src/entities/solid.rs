//! Filled 2D solid entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A filled triangle or quadrilateral.
///
/// Corners are stored in file order, which for four corners is
/// 1, 2, 4, 3 around the outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    /// Common entity data
    pub common: EntityCommon,
    /// Corners from codes 10-13 / 20-23 / 30-33
    pub vertices: Vec<Coordinate>,
}

impl Solid {
    /// Corners in outline order
    pub fn outline(&self) -> Vec<Coordinate> {
        match self.vertices.as_slice() {
            [a, b, c, d] => vec![*a, *b, *d, *c],
            other => other.to_vec(),
        }
    }
}

impl_entity!(Solid, "SOLID");
