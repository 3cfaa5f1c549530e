//! Lightweight polyline entity

use super::{impl_entity, EntityCommon, PolylineFlags, PolylineVertex};

/// A planar polyline with inline vertices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LwPolyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Flags (code 70, bit 0 = closed)
    pub flags: PolylineFlags,
    /// Elevation (code 38)
    pub elevation: f64,
    /// Vertices in drawing order
    pub vertices: Vec<PolylineVertex>,
}

impl LwPolyline {
    /// Check if the polyline is closed
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}

impl_entity!(LwPolyline, "LWPOLYLINE");
