//! Hatch entity and boundary path types

use super::{impl_entity, EntityCommon, PolylineVertex};
use crate::types::Coordinate;
use bitflags::bitflags;
use std::f64::consts::TAU;

bitflags! {
    /// Boundary path type flags (group code 92)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoundaryPathFlags: i32 {
        const EXTERNAL = 1;
        const POLYLINE = 2;
        const DERIVED = 4;
        const TEXTBOX = 8;
        const OUTERMOST = 16;
    }
}

/// One edge of an edge-list boundary path
#[derive(Debug, Clone, PartialEq)]
pub enum HatchEdge {
    /// Edge type 1
    Line {
        start: Coordinate,
        end: Coordinate,
    },
    /// Edge type 2; angles in degrees
    CircularArc {
        center: Coordinate,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    /// Edge type 3; parameters in radians, major axis relative to center
    EllipticArc {
        center: Coordinate,
        major_axis: Coordinate,
        minor_axis_ratio: f64,
        start_parameter: f64,
        end_parameter: f64,
        counter_clockwise: bool,
    },
}

impl HatchEdge {
    /// Build an edge from its type code and the last value seen per group code.
    ///
    /// Missing codes default to 0, except the ellipse ratio (1) and end
    /// parameter (2π). Unknown edge types yield `None`.
    pub fn from_codes(edge_type: i32, value: impl Fn(i32) -> Option<f64>) -> Option<Self> {
        let get = |code| value(code).unwrap_or(0.0);
        let point = |x_code, y_code| Coordinate::new(get(x_code), get(y_code));
        match edge_type {
            1 => Some(HatchEdge::Line {
                start: point(10, 20),
                end: point(11, 21),
            }),
            2 => Some(HatchEdge::CircularArc {
                center: point(10, 20),
                radius: get(40),
                start_angle: get(50),
                end_angle: get(51),
                counter_clockwise: get(73) != 0.0,
            }),
            3 => Some(HatchEdge::EllipticArc {
                center: point(10, 20),
                major_axis: point(11, 21),
                minor_axis_ratio: value(40).filter(|r| *r != 0.0).unwrap_or(1.0),
                start_parameter: get(50),
                end_parameter: value(51).filter(|p| *p != 0.0).unwrap_or(TAU),
                counter_clockwise: get(73) != 0.0,
            }),
            _ => None,
        }
    }
}

/// A hatch boundary loop
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryPath {
    /// Closed vertex ring with optional bulges
    Polyline {
        flags: BoundaryPathFlags,
        vertices: Vec<PolylineVertex>,
    },
    /// Ordered list of edges
    Edges {
        flags: BoundaryPathFlags,
        edges: Vec<HatchEdge>,
    },
}

impl BoundaryPath {
    /// Path type flags
    pub fn flags(&self) -> BoundaryPathFlags {
        match self {
            BoundaryPath::Polyline { flags, .. } | BoundaryPath::Edges { flags, .. } => *flags,
        }
    }
}

/// A filled or patterned region
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Pattern name (code 2)
    pub pattern_name: String,
    /// Solid fill (code 70 = 1)
    pub solid: bool,
    /// Boundary loops
    pub boundary_paths: Vec<BoundaryPath>,
}

impl_entity!(Hatch, "HATCH");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_edge_defaults() {
        let data: HashMap<i32, f64> = HashMap::from([(10, 1.0), (20, 2.0)]);
        let edge = HatchEdge::from_codes(3, |c| data.get(&c).copied());
        assert_eq!(
            edge,
            Some(HatchEdge::EllipticArc {
                center: Coordinate::new(1.0, 2.0),
                major_axis: Coordinate::new(0.0, 0.0),
                minor_axis_ratio: 1.0,
                start_parameter: 0.0,
                end_parameter: TAU,
                counter_clockwise: false,
            })
        );
        assert_eq!(HatchEdge::from_codes(4, |c| data.get(&c).copied()), None);
    }
}
