//! Geometry kernel
//!
//! Pure functions that turn DXF curve descriptions into point sequences:
//! circles, arcs and ellipses sampled at a configured resolution, polyline
//! bulge segments and rational B-splines.

pub mod arc;
pub mod bulge;
pub mod spline;

pub use arc::{tessellate_arc, tessellate_arc_radians, tessellate_circle, tessellate_ellipse};
pub use bulge::bulge_to_arc_points;
pub use spline::evaluate_bspline;

use std::f64::consts::TAU;

/// Lengths and bulges below this are treated as zero
pub const EPSILON: f64 = 1e-10;

/// Number of segments for a sweep of `sweep` radians, at least 2
pub(crate) fn segments_for_sweep(sweep: f64, circle_segments: usize) -> usize {
    let share = (sweep.abs() / TAU * circle_segments as f64).ceil();
    if share.is_finite() {
        (share as usize).max(2)
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_segments_for_sweep() {
        assert_eq!(segments_for_sweep(TAU, 72), 72);
        assert_eq!(segments_for_sweep(PI / 2.0, 72), 18);
        assert_eq!(segments_for_sweep(0.001, 72), 2);
        assert_eq!(segments_for_sweep(-PI, 10), 5);
    }
}
