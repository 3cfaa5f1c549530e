//! HATCH boundary path reader
//!
//! A hatch record interleaves its header, one or more boundary paths and the
//! pattern definition in a single pair run. Reading walks three phases:
//! header (until `91` announces the path count), polyline path vertices and
//! edge lists. `92` starts each path and `97` (source object count) ends its
//! geometry, so pattern and seed point data after it is not mistaken for
//! path data.

use super::entity_reader::EntityReader;
use crate::entities::{BoundaryPath, BoundaryPathFlags, Hatch, HatchEdge, PolylineVertex};
use crate::io::dxf::GroupPair;
use crate::notification::NotificationType;
use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HatchPhase {
    Header,
    Path,
    Edges,
}

/// Values seen for the edge under construction, last value per code wins
#[derive(Debug, Default)]
struct EdgeAccumulator {
    edge_type: i32,
    values: AHashMap<i32, f64>,
}

#[derive(Debug, Default)]
struct PathAccumulator {
    flags: BoundaryPathFlags,
    vertices: Vec<PolylineVertex>,
    edges: Vec<HatchEdge>,
    sealed: bool,
}

impl PathAccumulator {
    fn new(flags: BoundaryPathFlags) -> Self {
        Self {
            flags,
            ..Default::default()
        }
    }

    fn into_path(self) -> Option<BoundaryPath> {
        if self.flags.contains(BoundaryPathFlags::POLYLINE) && !self.vertices.is_empty() {
            Some(BoundaryPath::Polyline {
                flags: self.flags,
                vertices: self.vertices,
            })
        } else if !self.edges.is_empty() {
            Some(BoundaryPath::Edges {
                flags: self.flags,
                edges: self.edges,
            })
        } else {
            None
        }
    }
}

impl EntityReader<'_> {
    pub(super) fn read_hatch(&mut self, run: &[GroupPair]) -> Hatch {
        let mut hatch = Hatch {
            common: self.read_common(run),
            ..Default::default()
        };

        let mut phase = HatchPhase::Header;
        let mut path: Option<PathAccumulator> = None;
        let mut edge = EdgeAccumulator::default();

        for pair in run {
            match phase {
                HatchPhase::Header => match pair.code {
                    2 => hatch.pattern_name = pair.value.clone(),
                    70 => hatch.solid = self.int(pair) == 1,
                    91 => {
                        if self.int(pair) > 0 {
                            phase = HatchPhase::Path;
                        }
                    }
                    _ => {}
                },
                HatchPhase::Path => match pair.code {
                    92 => {
                        phase = self.start_path(pair, &mut path, &mut hatch.boundary_paths);
                    }
                    97 => {
                        if let Some(current) = path.as_mut() {
                            current.sealed = true;
                        }
                    }
                    10 | 20 | 42 => {
                        let value = self.double(pair);
                        let Some(current) = path.as_mut().filter(|p| !p.sealed) else {
                            continue;
                        };
                        match pair.code {
                            10 => current.vertices.push(PolylineVertex::new(value, 0.0)),
                            20 => {
                                if let Some(vertex) = current.vertices.last_mut() {
                                    vertex.y = value;
                                }
                            }
                            _ => {
                                if let Some(vertex) = current.vertices.last_mut() {
                                    vertex.bulge = value;
                                }
                            }
                        }
                    }
                    _ => {}
                },
                HatchPhase::Edges => match pair.code {
                    72 => {
                        self.flush_edge(&mut edge, path.as_mut());
                        edge.edge_type = self.int(pair);
                    }
                    92 => {
                        self.flush_edge(&mut edge, path.as_mut());
                        edge.edge_type = 0;
                        phase = self.start_path(pair, &mut path, &mut hatch.boundary_paths);
                    }
                    97 => {
                        self.flush_edge(&mut edge, path.as_mut());
                        edge.edge_type = 0;
                        if let Some(current) = path.as_mut() {
                            current.sealed = true;
                        }
                    }
                    code => {
                        if path.as_ref().is_some_and(|p| !p.sealed) {
                            let value = self.double(pair);
                            edge.values.insert(code, value);
                        }
                    }
                },
            }
        }

        self.flush_edge(&mut edge, path.as_mut());
        if let Some(boundary) = path.and_then(PathAccumulator::into_path) {
            hatch.boundary_paths.push(boundary);
        }
        hatch
    }

    /// Close the current path and open a new one with the flags in `pair`
    fn start_path(
        &mut self,
        pair: &GroupPair,
        path: &mut Option<PathAccumulator>,
        paths: &mut Vec<BoundaryPath>,
    ) -> HatchPhase {
        if let Some(boundary) = path.take().and_then(PathAccumulator::into_path) {
            paths.push(boundary);
        }
        let flags = BoundaryPathFlags::from_bits_retain(self.int(pair));
        *path = Some(PathAccumulator::new(flags));
        if flags.contains(BoundaryPathFlags::POLYLINE) {
            HatchPhase::Path
        } else {
            HatchPhase::Edges
        }
    }

    fn flush_edge(&mut self, edge: &mut EdgeAccumulator, path: Option<&mut PathAccumulator>) {
        if edge.values.is_empty() {
            return;
        }
        let values = std::mem::take(&mut edge.values);
        match HatchEdge::from_codes(edge.edge_type, |code| values.get(&code).copied()) {
            Some(built) => {
                if let Some(path) = path {
                    path.edges.push(built);
                }
            }
            // Data before the first 72 (edge count and such) has no type
            None if edge.edge_type == 0 => {}
            None => self.notifications.notify(
                NotificationType::NotSupported,
                format!("Hatch edge type {} skipped", edge.edge_type),
            ),
        }
    }
}
