//! Dimension entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// A dimension annotation, reduced to its anchor points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dimension {
    /// Common entity data
    pub common: EntityCommon,
    /// Definition point (codes 10/20/30)
    pub definition_point: Coordinate,
    /// Middle of the dimension text (codes 11/21/31)
    pub text_middle_point: Coordinate,
    /// Dimension type flags (code 70)
    pub dimension_type: i32,
    /// Override text (code 1)
    pub text: Option<String>,
    /// First extension line point (codes 13/23/33), only when present
    pub linear_point: Option<Coordinate>,
}

impl_entity!(Dimension, "DIMENSION");
