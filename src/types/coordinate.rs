//! 2D / 3D coordinate type

use nalgebra::{Point2, Vector2};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// A point with two or three components.
///
/// The third component is only present when the source supplied a non-zero
/// Z value. Consumers must handle both shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component, `None` for planar points
    pub z: Option<f64>,
}

impl Coordinate {
    /// Create a planar coordinate
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Create a coordinate with an explicit Z component
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Create a coordinate keeping Z only when it is present and non-zero
    pub fn from_parts(x: f64, y: f64, z: Option<f64>) -> Self {
        Self {
            x,
            y,
            z: z.filter(|z| *z != 0.0),
        }
    }

    /// Check whether the coordinate carries a third component
    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// Z component, zero for planar points
    pub fn z_or_zero(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }

    /// Drop the third component
    pub fn to_2d(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Force a third component (zero when absent)
    pub fn to_3d(self) -> Self {
        Self::new_3d(self.x, self.y, self.z_or_zero())
    }

    /// Check whether two coordinates share X and Y exactly
    pub fn same_xy(&self, other: &Coordinate) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Planar part as an nalgebra point
    pub fn xy(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Planar part as an nalgebra vector
    pub fn xy_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.z.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.x)?;
        seq.serialize_element(&self.y)?;
        if let Some(z) = self.z {
            seq.serialize_element(&z)?;
        }
        seq.end()
    }
}

/// If any coordinate of `points` is 3D, promote all of them to 3D.
///
/// Keeps multi-vertex records from mixing 2- and 3-component tuples.
pub(crate) fn unify_dimension(points: &mut [Coordinate]) {
    if points.iter().any(Coordinate::is_3d) {
        for p in points.iter_mut() {
            *p = p.to_3d();
        }
    }
}
