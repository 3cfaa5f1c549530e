//! Polyline entity and vertex type shared with LWPOLYLINE and hatch paths

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;
use bitflags::bitflags;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PolylineFlags: i32 {
        /// Closed polyline
        const CLOSED = 1;
        /// Curve-fit vertices added
        const CURVE_FIT = 2;
        /// Spline-fit vertices added
        const SPLINE_FIT = 4;
        /// 3D polyline
        const POLYLINE_3D = 8;
        /// 3D polygon mesh
        const POLYGON_MESH = 16;
        /// Mesh closed in N direction
        const CLOSED_N = 32;
        /// Polyface mesh
        const POLYFACE_MESH = 64;
        /// Continuous line type pattern
        const CONTINUOUS_LINETYPE = 128;
    }
}

/// A polyline vertex.
///
/// `bulge` describes the segment towards the next vertex: the tangent of a
/// quarter of the included arc angle, 0 for a straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolylineVertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate when given
    pub z: Option<f64>,
    /// Bulge of the outgoing segment
    pub bulge: f64,
}

impl PolylineVertex {
    /// Create a planar vertex
    pub fn new(x: f64, y: f64) -> Self {
        PolylineVertex {
            x,
            y,
            z: None,
            bulge: 0.0,
        }
    }

    /// Set the bulge
    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }

    /// Vertex location
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// A heavy (old style) polyline built from VERTEX sub-records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Flags (code 70)
    pub flags: PolylineFlags,
    /// Vertices in drawing order
    pub vertices: Vec<PolylineVertex>,
}

impl Polyline {
    /// Check if the polyline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}

impl_entity!(Polyline, "POLYLINE");
