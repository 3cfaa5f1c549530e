//! Spline entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;
use bitflags::bitflags;

bitflags! {
    /// Spline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SplineFlags: i32 {
        /// Closed spline
        const CLOSED = 1;
        /// Periodic spline
        const PERIODIC = 2;
        /// Rational spline
        const RATIONAL = 4;
        /// Planar spline
        const PLANAR = 8;
        /// Linear spline
        const LINEAR = 16;
    }
}

/// A B-spline or NURBS curve
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Curve degree (code 71)
    pub degree: usize,
    /// Flags (code 70)
    pub flags: SplineFlags,
    /// Knot values (code 40)
    pub knots: Vec<f64>,
    /// Control point weights (code 41)
    pub weights: Vec<f64>,
    /// Control points (codes 10/20/30)
    pub control_points: Vec<Coordinate>,
    /// Fit points (codes 11/21/31)
    pub fit_points: Vec<Coordinate>,
}

impl Spline {
    /// Check if the spline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }
}

impl Default for Spline {
    fn default() -> Self {
        Spline {
            common: EntityCommon::new(),
            degree: 3,
            flags: SplineFlags::empty(),
            knots: Vec::new(),
            weights: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
        }
    }
}

impl_entity!(Spline, "SPLINE");
