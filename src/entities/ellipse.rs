//! Ellipse entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;
use std::f64::consts::TAU;

/// An ellipse or elliptical arc
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Coordinate,
    /// Endpoint of the major axis, relative to the center (codes 11/21/31)
    pub major_axis: Coordinate,
    /// Minor to major axis ratio (code 40)
    pub ratio: f64,
    /// Start parameter in radians (code 41)
    pub start_parameter: f64,
    /// End parameter in radians (code 42)
    pub end_parameter: f64,
}

impl Ellipse {
    /// Check whether the parameters span the whole ellipse
    pub fn is_full(&self) -> bool {
        self.start_parameter.abs() < 1e-6 && (self.end_parameter - TAU).abs() < 1e-6
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            common: EntityCommon::new(),
            center: Coordinate::default(),
            major_axis: Coordinate::new(1.0, 0.0),
            ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: TAU,
        }
    }
}

impl_entity!(Ellipse, "ELLIPSE");
