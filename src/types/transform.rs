//! Block insertion transform
//!
//! A block reference places the block's entities by, in order: moving the
//! block base point to the origin, scaling per axis, rotating about Z and
//! moving to the insertion point. The planar part is composed once into a
//! homogeneous 3x3 matrix; Z is handled separately so planar points stay
//! planar.

use crate::types::Coordinate;
use nalgebra::{Matrix3, Point2, Vector2};

/// Affine placement of block geometry at an insertion point.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertTransform {
    planar: Matrix3<f64>,
    base_z: f64,
    scale_z: f64,
    insertion_z: f64,
}

impl InsertTransform {
    /// Create a new transform.
    ///
    /// `rotation` is in degrees, counter-clockwise about Z.
    pub fn new(
        insertion: Coordinate,
        base: Coordinate,
        scale: (f64, f64, f64),
        rotation: f64,
    ) -> Self {
        let (scale_x, scale_y, scale_z) = scale;
        let planar = Matrix3::new_translation(&insertion.xy_vector())
            * Matrix3::new_rotation(rotation.to_radians())
            * Matrix3::new_nonuniform_scaling(&Vector2::new(scale_x, scale_y))
            * Matrix3::new_translation(&-base.xy_vector());

        Self {
            planar,
            base_z: base.z_or_zero(),
            scale_z,
            insertion_z: insertion.z_or_zero(),
        }
    }

    /// Transform a single coordinate.
    ///
    /// The Z component is transformed only when the input carries one.
    pub fn apply(&self, point: &Coordinate) -> Coordinate {
        let moved = self.planar.transform_point(&Point2::new(point.x, point.y));
        Coordinate {
            x: moved.x,
            y: moved.y,
            z: point
                .z
                .map(|z| (z - self.base_z) * self.scale_z + self.insertion_z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translate_and_scale() {
        let t = InsertTransform::new(
            Coordinate::new(5.0, 5.0),
            Coordinate::new(0.0, 0.0),
            (2.0, 2.0, 2.0),
            0.0,
        );
        let p = t.apply(&Coordinate::new(2.0, 0.0));
        assert_relative_eq!(p.x, 9.0);
        assert_relative_eq!(p.y, 5.0);
        assert!(p.z.is_none());
    }

    #[test]
    fn test_base_point_and_rotation() {
        let t = InsertTransform::new(
            Coordinate::new(10.0, 0.0),
            Coordinate::new(1.0, 1.0),
            (1.0, 1.0, 1.0),
            90.0,
        );
        let p = t.apply(&Coordinate::new(2.0, 1.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_z_only_for_spatial_points() {
        let t = InsertTransform::new(
            Coordinate::new_3d(0.0, 0.0, 4.0),
            Coordinate::new(0.0, 0.0),
            (1.0, 1.0, 3.0),
            0.0,
        );
        assert_eq!(t.apply(&Coordinate::new(1.0, 1.0)).z, None);
        assert_eq!(t.apply(&Coordinate::new_3d(1.0, 1.0, 2.0)).z, Some(10.0));
    }
}
