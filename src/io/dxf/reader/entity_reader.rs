//! Entity reader, shared by the ENTITIES section and block bodies

use crate::entities::*;
use crate::io::dxf::GroupPair;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::coordinate::unify_dimension;
use crate::types::Coordinate;

/// Builds typed entities from a flat pair stream.
///
/// Every code 0 marker names an entity and delimits its pair run. POLYLINE
/// additionally owns the VERTEX runs that follow it, up to and including
/// SEQEND.
pub(crate) struct EntityReader<'a> {
    pub(super) notifications: &'a mut NotificationCollection,
}

impl<'a> EntityReader<'a> {
    pub(crate) fn new(notifications: &'a mut NotificationCollection) -> Self {
        Self { notifications }
    }

    pub(crate) fn read(&mut self, pairs: &[GroupPair]) -> Vec<EntityType> {
        let mut entities = Vec::new();
        let mut index = 0;

        while index < pairs.len() {
            if pairs[index].code != 0 {
                index += 1;
                continue;
            }

            let kind = pairs[index].value.as_str();
            let start = index + 1;
            let end = next_marker(pairs, start);
            let run = &pairs[start..end];
            index = end;

            if kind == "POLYLINE" {
                let (polyline, next) = self.read_polyline(run, pairs, end);
                entities.push(EntityType::Polyline(polyline));
                index = next;
                continue;
            }

            if let Some(entity) = self.read_entity(kind, run) {
                entities.push(entity);
            }
        }

        entities
    }

    fn read_entity(&mut self, kind: &str, run: &[GroupPair]) -> Option<EntityType> {
        let entity = match kind {
            "LINE" => EntityType::Line(self.read_line(run)),
            "POINT" => EntityType::Point(self.read_point_entity(run)),
            "CIRCLE" => EntityType::Circle(self.read_circle(run)),
            "ARC" => EntityType::Arc(self.read_arc(run)),
            "ELLIPSE" => EntityType::Ellipse(self.read_ellipse(run)),
            "LWPOLYLINE" => EntityType::LwPolyline(self.read_lwpolyline(run)),
            "SPLINE" => EntityType::Spline(self.read_spline(run)),
            "TEXT" => EntityType::Text(self.read_text(run)),
            "MTEXT" => EntityType::MText(self.read_mtext(run)),
            "INSERT" => EntityType::Insert(self.read_insert(run)),
            "3DFACE" => EntityType::Face3D(Face3D {
                common: self.read_common(run),
                vertices: self.read_corners(run),
            }),
            "SOLID" => EntityType::Solid(Solid {
                common: self.read_common(run),
                vertices: self.read_corners(run),
            }),
            "HATCH" => EntityType::Hatch(self.read_hatch(run)),
            "DIMENSION" => EntityType::Dimension(self.read_dimension(run)),
            "SEQEND" => return None,
            other => {
                self.notifications.notify(
                    NotificationType::NotSupported,
                    format!("Entity type {} skipped", other),
                );
                return None;
            }
        };
        Some(entity)
    }

    pub(super) fn double(&mut self, pair: &GroupPair) -> f64 {
        pair.double_or_zero(self.notifications)
    }

    pub(super) fn int(&mut self, pair: &GroupPair) -> i32 {
        pair.int_or_zero(self.notifications)
    }

    /// Read the properties shared by all entities
    pub(super) fn read_common(&mut self, run: &[GroupPair]) -> EntityCommon {
        let mut common = EntityCommon::new();
        for pair in run {
            match pair.code {
                5 => common.handle = Some(pair.value.clone()),
                6 => common.line_type = Some(pair.value.clone()),
                8 => common.layer = pair.value.clone(),
                60 => common.visible = self.int(pair) == 0,
                62 => common.color_index = Some(self.int(pair)),
                370 => common.line_weight = Some(self.int(pair)),
                _ => {}
            }
        }
        common
    }

    /// Read the point at `x_code`, `x_code + 10`, `x_code + 20`.
    ///
    /// The last occurrence of each code wins; Z is kept only when non-zero.
    fn read_point(&mut self, run: &[GroupPair], x_code: i32) -> Coordinate {
        let (mut x, mut y, mut z) = (0.0, 0.0, None);
        for pair in run {
            if pair.code == x_code {
                x = self.double(pair);
            } else if pair.code == x_code + 10 {
                y = self.double(pair);
            } else if pair.code == x_code + 20 {
                z = Some(self.double(pair));
            }
        }
        Coordinate::from_parts(x, y, z)
    }

    fn has_code(run: &[GroupPair], code: i32) -> bool {
        run.iter().any(|pair| pair.code == code)
    }

    fn read_line(&mut self, run: &[GroupPair]) -> Line {
        Line {
            common: self.read_common(run),
            start: self.read_point(run, 10),
            end: self.read_point(run, 11),
        }
    }

    fn read_point_entity(&mut self, run: &[GroupPair]) -> Point {
        Point {
            common: self.read_common(run),
            location: self.read_point(run, 10),
        }
    }

    fn read_circle(&mut self, run: &[GroupPair]) -> Circle {
        let mut circle = Circle {
            common: self.read_common(run),
            center: self.read_point(run, 10),
            ..Default::default()
        };
        for pair in run {
            if pair.code == 40 {
                circle.radius = self.double(pair);
            }
        }
        circle
    }

    fn read_arc(&mut self, run: &[GroupPair]) -> Arc {
        let mut arc = Arc {
            common: self.read_common(run),
            center: self.read_point(run, 10),
            ..Default::default()
        };
        for pair in run {
            match pair.code {
                40 => arc.radius = self.double(pair),
                50 => arc.start_angle = self.double(pair),
                51 => arc.end_angle = self.double(pair),
                _ => {}
            }
        }
        arc
    }

    fn read_ellipse(&mut self, run: &[GroupPair]) -> Ellipse {
        let mut ellipse = Ellipse {
            common: self.read_common(run),
            center: self.read_point(run, 10),
            major_axis: self.read_point(run, 11),
            ..Default::default()
        };
        for pair in run {
            match pair.code {
                40 => ellipse.ratio = self.double(pair),
                41 => ellipse.start_parameter = self.double(pair),
                42 => ellipse.end_parameter = self.double(pair),
                _ => {}
            }
        }
        ellipse
    }

    /// Vertices are inline: each code 10 starts a new vertex, 20 and 42 fill
    /// in the vertex under construction.
    fn read_lwpolyline(&mut self, run: &[GroupPair]) -> LwPolyline {
        let mut polyline = LwPolyline {
            common: self.read_common(run),
            ..Default::default()
        };
        let mut current: Option<PolylineVertex> = None;

        for pair in run {
            match pair.code {
                70 => polyline.flags = PolylineFlags::from_bits_retain(self.int(pair)),
                38 => polyline.elevation = self.double(pair),
                10 => {
                    if let Some(vertex) = current.take() {
                        polyline.vertices.push(vertex);
                    }
                    current = Some(PolylineVertex::new(self.double(pair), 0.0));
                }
                20 => {
                    let y = self.double(pair);
                    if let Some(vertex) = current.as_mut() {
                        vertex.y = y;
                    }
                }
                42 => {
                    let bulge = self.double(pair);
                    if let Some(vertex) = current.as_mut() {
                        vertex.bulge = bulge;
                    }
                }
                _ => {}
            }
        }

        if let Some(vertex) = current {
            polyline.vertices.push(vertex);
        }
        polyline
    }

    /// Read a POLYLINE header run and the VERTEX records after it.
    ///
    /// Returns the polyline and the index of the first pair it did not
    /// consume. A SEQEND marker (and its run) ends the polyline; any other
    /// marker ends it without being consumed.
    fn read_polyline(
        &mut self,
        header: &[GroupPair],
        pairs: &[GroupPair],
        mut index: usize,
    ) -> (Polyline, usize) {
        let mut polyline = Polyline {
            common: self.read_common(header),
            ..Default::default()
        };
        for pair in header {
            if pair.code == 70 {
                polyline.flags = PolylineFlags::from_bits_retain(self.int(pair));
            }
        }

        while index < pairs.len() {
            let marker = &pairs[index];
            let end = next_marker(pairs, index + 1);
            if marker.is_marker("VERTEX") {
                let vertex = self.read_vertex(&pairs[index + 1..end]);
                polyline.vertices.push(vertex);
                index = end;
            } else if marker.is_marker("SEQEND") {
                index = end;
                break;
            } else {
                break;
            }
        }

        if polyline.vertices.iter().any(|v| v.z.is_some()) {
            for vertex in polyline.vertices.iter_mut() {
                vertex.z = Some(vertex.z.unwrap_or(0.0));
            }
        }
        (polyline, index)
    }

    fn read_vertex(&mut self, run: &[GroupPair]) -> PolylineVertex {
        let mut vertex = PolylineVertex::default();
        for pair in run {
            match pair.code {
                10 => vertex.x = self.double(pair),
                20 => vertex.y = self.double(pair),
                30 => vertex.z = Some(self.double(pair)).filter(|z| *z != 0.0),
                42 => vertex.bulge = self.double(pair),
                _ => {}
            }
        }
        vertex
    }

    /// Control points come from repeated 10/20/30 groups and fit points from
    /// 11/21/31. A new X flushes a pending planar point; a Z completes the
    /// point under construction.
    fn read_spline(&mut self, run: &[GroupPair]) -> Spline {
        let mut spline = Spline {
            common: self.read_common(run),
            ..Default::default()
        };
        let mut control = PointAccumulator::default();
        let mut fit = PointAccumulator::default();

        for pair in run {
            match pair.code {
                70 => spline.flags = SplineFlags::from_bits_retain(self.int(pair)),
                71 => spline.degree = usize::try_from(self.int(pair)).unwrap_or(0),
                40 => spline.knots.push(self.double(pair)),
                41 => spline.weights.push(self.double(pair)),
                10 => control.start(self.double(pair), &mut spline.control_points),
                20 => control.set_y(self.double(pair)),
                30 => control.finish(self.double(pair), &mut spline.control_points),
                11 => fit.start(self.double(pair), &mut spline.fit_points),
                21 => fit.set_y(self.double(pair)),
                31 => fit.finish(self.double(pair), &mut spline.fit_points),
                _ => {}
            }
        }

        control.flush(&mut spline.control_points);
        fit.flush(&mut spline.fit_points);
        unify_dimension(&mut spline.control_points);
        unify_dimension(&mut spline.fit_points);
        spline
    }

    fn read_text(&mut self, run: &[GroupPair]) -> Text {
        let mut text = Text {
            common: self.read_common(run),
            insertion: self.read_point(run, 10),
            ..Default::default()
        };
        for pair in run {
            match pair.code {
                1 => text.value = decode_caret_escapes(&pair.value),
                7 => text.style = Some(pair.value.clone()),
                40 => text.height = self.double(pair),
                50 => text.rotation = self.double(pair),
                _ => {}
            }
        }
        text
    }

    fn read_mtext(&mut self, run: &[GroupPair]) -> MText {
        let mut mtext = MText {
            common: self.read_common(run),
            insertion: self.read_point(run, 10),
            ..Default::default()
        };
        let mut rotation = None;
        for pair in run {
            match pair.code {
                1 | 3 => mtext.value.push_str(&decode_caret_escapes(&pair.value)),
                7 => mtext.style = Some(pair.value.clone()),
                40 => mtext.height = self.double(pair),
                41 => mtext.width = self.double(pair),
                50 => rotation = Some(self.double(pair)),
                _ => {}
            }
        }

        mtext.rotation = match rotation {
            Some(degrees) => degrees,
            None if Self::has_code(run, 11) => {
                let direction = self.read_point(run, 11);
                direction.y.atan2(direction.x).to_degrees()
            }
            None => 0.0,
        };
        mtext
    }

    fn read_insert(&mut self, run: &[GroupPair]) -> Insert {
        let mut insert = Insert {
            common: self.read_common(run),
            insertion: self.read_point(run, 10),
            ..Default::default()
        };
        for pair in run {
            match pair.code {
                2 => insert.block_name = pair.value.clone(),
                41 => insert.x_scale = self.double(pair),
                42 => insert.y_scale = self.double(pair),
                43 => insert.z_scale = self.double(pair),
                44 => insert.column_spacing = self.double(pair),
                45 => insert.row_spacing = self.double(pair),
                50 => insert.rotation = self.double(pair),
                70 => insert.column_count = u32::try_from(self.int(pair)).unwrap_or(1).max(1),
                71 => insert.row_count = u32::try_from(self.int(pair)).unwrap_or(1).max(1),
                _ => {}
            }
        }
        insert
    }

    /// Up to four corners from codes 10-13 / 20-23 / 30-33.
    ///
    /// A corner exists when any of its codes is present.
    fn read_corners(&mut self, run: &[GroupPair]) -> Vec<Coordinate> {
        let mut corners: [Option<(f64, f64, Option<f64>)>; 4] = [None; 4];
        for pair in run {
            let (slot, axis) = match pair.code {
                10..=13 => (pair.code - 10, 0),
                20..=23 => (pair.code - 20, 1),
                30..=33 => (pair.code - 30, 2),
                _ => continue,
            };
            let value = self.double(pair);
            let corner = corners[slot as usize].get_or_insert((0.0, 0.0, None));
            match axis {
                0 => corner.0 = value,
                1 => corner.1 = value,
                _ => corner.2 = Some(value),
            }
        }

        let mut vertices: Vec<Coordinate> = corners
            .iter()
            .flatten()
            .map(|&(x, y, z)| Coordinate::from_parts(x, y, z))
            .collect();
        unify_dimension(&mut vertices);
        vertices
    }

    fn read_dimension(&mut self, run: &[GroupPair]) -> Dimension {
        let mut dimension = Dimension {
            common: self.read_common(run),
            definition_point: self.read_point(run, 10),
            text_middle_point: self.read_point(run, 11),
            ..Default::default()
        };
        if Self::has_code(run, 13) {
            dimension.linear_point = Some(self.read_point(run, 13));
        }
        for pair in run {
            match pair.code {
                1 => dimension.text = Some(decode_caret_escapes(&pair.value)),
                70 => dimension.dimension_type = self.int(pair),
                _ => {}
            }
        }
        dimension
    }
}

/// Index of the next code 0 pair at or after `from`, or the end of the slice
pub(super) fn next_marker(pairs: &[GroupPair], from: usize) -> usize {
    pairs[from.min(pairs.len())..]
        .iter()
        .position(|pair| pair.code == 0)
        .map_or(pairs.len(), |offset| from + offset)
}

/// Assembles points from repeated X/Y/Z group runs
#[derive(Debug, Default)]
struct PointAccumulator {
    x: Option<f64>,
    y: Option<f64>,
}

impl PointAccumulator {
    fn start(&mut self, x: f64, points: &mut Vec<Coordinate>) {
        self.flush(points);
        self.x = Some(x);
    }

    fn set_y(&mut self, y: f64) {
        self.y = Some(y);
    }

    fn finish(&mut self, z: f64, points: &mut Vec<Coordinate>) {
        if let (Some(x), Some(y)) = (self.x, self.y) {
            points.push(Coordinate::from_parts(x, y, Some(z)));
            self.x = None;
            self.y = None;
        }
    }

    fn flush(&mut self, points: &mut Vec<Coordinate>) {
        if let (Some(x), Some(y)) = (self.x.take(), self.y.take()) {
            points.push(Coordinate::new(x, y));
        }
    }
}

/// Decode the caret escapes DXF uses for control characters in strings
pub(crate) fn decode_caret_escapes(value: &str) -> String {
    if !value.contains('^') {
        return value.to_string();
    }
    let mut decoded = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '^' {
            decoded.push(c);
            continue;
        }
        match chars.peek() {
            Some('J') => decoded.push('\n'),
            Some('M') => decoded.push('\r'),
            Some('I') => decoded.push('\t'),
            Some(' ') => decoded.push('^'),
            _ => {
                decoded.push('^');
                continue;
            }
        }
        chars.next();
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::tokenize;
    use approx::assert_relative_eq;

    fn read(text: &str) -> Vec<EntityType> {
        let mut notes = NotificationCollection::new();
        EntityReader::new(&mut notes).read(&tokenize(text))
    }

    fn single(text: &str) -> EntityType {
        let mut entities = read(text);
        assert_eq!(entities.len(), 1, "expected one entity in {:?}", entities);
        entities.remove(0)
    }

    #[test]
    fn test_read_line_with_common_properties() {
        let entity = single(
            "0\nLINE\n5\n2F\n8\nWalls\n6\nDASHED\n62\n1\n370\n25\n\
             10\n0.0\n20\n0.0\n30\n0.0\n11\n10.0\n21\n5.0\n31\n2.0\n",
        );
        let EntityType::Line(line) = entity else {
            panic!("expected a line");
        };
        assert_eq!(line.common.handle.as_deref(), Some("2F"));
        assert_eq!(line.common.layer, "Walls");
        assert_eq!(line.common.line_type.as_deref(), Some("DASHED"));
        assert_eq!(line.common.color_index, Some(1));
        assert_eq!(line.common.line_weight, Some(25));
        assert!(line.common.visible);
        assert_eq!(line.start, Coordinate::new(0.0, 0.0));
        assert_eq!(line.end, Coordinate::new_3d(10.0, 5.0, 2.0));
    }

    #[test]
    fn test_invisible_flag() {
        let entity = single("0\nPOINT\n60\n1\n10\n1\n20\n2\n");
        assert!(!entity.common().visible);
    }

    #[test]
    fn test_read_arc_defaults() {
        let EntityType::Arc(arc) = single("0\nARC\n10\n1\n20\n1\n40\n2.5\n50\n90\n") else {
            panic!("expected an arc");
        };
        assert_eq!(arc.radius, 2.5);
        assert_eq!(arc.start_angle, 90.0);
        assert_eq!(arc.end_angle, 360.0);
    }

    #[test]
    fn test_read_ellipse_defaults() {
        let EntityType::Ellipse(ellipse) = single("0\nELLIPSE\n10\n0\n20\n0\n11\n4\n21\n0\n")
        else {
            panic!("expected an ellipse");
        };
        assert_eq!(ellipse.ratio, 1.0);
        assert!(ellipse.is_full());
        assert_eq!(ellipse.major_axis, Coordinate::new(4.0, 0.0));
    }

    #[test]
    fn test_read_lwpolyline_inline_vertices() {
        let entity = single(
            "0\nLWPOLYLINE\n90\n3\n70\n1\n38\n2.0\n\
             10\n0\n20\n0\n10\n10\n20\n0\n42\n1.0\n10\n10\n20\n10\n",
        );
        let EntityType::LwPolyline(polyline) = entity else {
            panic!("expected a lwpolyline");
        };
        assert!(polyline.is_closed());
        assert_eq!(polyline.elevation, 2.0);
        assert_eq!(
            polyline.vertices,
            vec![
                PolylineVertex::new(0.0, 0.0),
                PolylineVertex::new(10.0, 0.0).with_bulge(1.0),
                PolylineVertex::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_read_polyline_with_vertices() {
        let entities = read(
            "0\nPOLYLINE\n8\nP\n66\n1\n70\n1\n\
             0\nVERTEX\n10\n0\n20\n0\n\
             0\nVERTEX\n10\n5\n20\n0\n42\n0.5\n\
             0\nVERTEX\n10\n5\n20\n5\n30\n1.0\n\
             0\nSEQEND\n8\nP\n\
             0\nLINE\n10\n0\n20\n0\n11\n1\n21\n1\n",
        );
        assert_eq!(entities.len(), 2);
        let EntityType::Polyline(polyline) = &entities[0] else {
            panic!("expected a polyline");
        };
        assert!(polyline.is_closed());
        assert_eq!(polyline.common.layer, "P");
        assert_eq!(polyline.vertices.len(), 3);
        assert_eq!(polyline.vertices[1].bulge, 0.5);
        assert_eq!(polyline.vertices[0].z, Some(0.0));
        assert_eq!(polyline.vertices[2].z, Some(1.0));
        assert_eq!(entities[1].entity_type(), "LINE");
    }

    #[test]
    fn test_polyline_without_seqend_ends_at_next_entity() {
        let entities = read("0\nPOLYLINE\n0\nVERTEX\n10\n1\n20\n1\n0\nCIRCLE\n40\n1\n");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[1].entity_type(), "CIRCLE");
    }

    #[test]
    fn test_read_spline_points() {
        let entity = single(
            "0\nSPLINE\n70\n8\n71\n2\n40\n0\n40\n0\n40\n0\n40\n1\n40\n1\n40\n1\n\
             10\n0\n20\n0\n30\n0\n10\n5\n20\n5\n30\n0\n10\n10\n20\n0\n30\n0\n\
             11\n1\n21\n1\n11\n2\n21\n2\n",
        );
        let EntityType::Spline(spline) = entity else {
            panic!("expected a spline");
        };
        assert_eq!(spline.degree, 2);
        assert!(!spline.is_closed());
        assert_eq!(spline.knots.len(), 6);
        assert_eq!(
            spline.control_points,
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(5.0, 5.0),
                Coordinate::new(10.0, 0.0)
            ]
        );
        assert_eq!(
            spline.fit_points,
            vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_read_text_and_mtext() {
        let entities = read(
            "0\nTEXT\n10\n1\n20\n2\n40\n2.5\n1\nA^JB\n50\n45\n7\nRomans\n\
             0\nMTEXT\n10\n0\n20\n0\n3\nfirst\n1\nsecond\n41\n30\n11\n0\n21\n1\n",
        );
        let EntityType::Text(text) = &entities[0] else {
            panic!("expected text");
        };
        assert_eq!(text.value, "A\nB");
        assert_eq!(text.height, 2.5);
        assert_eq!(text.rotation, 45.0);
        assert_eq!(text.style.as_deref(), Some("Romans"));

        let EntityType::MText(mtext) = &entities[1] else {
            panic!("expected mtext");
        };
        assert_eq!(mtext.value, "firstsecond");
        assert_eq!(mtext.width, 30.0);
        assert_eq!(mtext.height, 1.0);
        assert_relative_eq!(mtext.rotation, 90.0);
    }

    #[test]
    fn test_read_insert() {
        let entity = single("0\nINSERT\n2\nDOOR\n10\n5\n20\n6\n41\n2\n50\n30\n");
        let EntityType::Insert(insert) = entity else {
            panic!("expected an insert");
        };
        assert_eq!(insert.block_name, "DOOR");
        assert_eq!(insert.insertion, Coordinate::new(5.0, 6.0));
        assert_eq!(insert.scale(), (2.0, 1.0, 1.0));
        assert_eq!(insert.rotation, 30.0);
        assert!(!insert.is_array());
    }

    #[test]
    fn test_read_corners() {
        let entity = single(
            "0\nSOLID\n10\n0\n20\n0\n30\n0\n11\n1\n21\n0\n31\n0\n12\n0\n22\n1\n32\n0\n13\n1\n23\n1\n33\n0\n",
        );
        let EntityType::Solid(solid) = entity else {
            panic!("expected a solid");
        };
        assert_eq!(solid.vertices.len(), 4);
        assert!(solid.vertices.iter().all(|v| !v.is_3d()));

        let EntityType::Face3D(face) =
            single("0\n3DFACE\n10\n0\n20\n0\n30\n1\n11\n1\n21\n0\n12\n1\n22\n1\n")
        else {
            panic!("expected a face");
        };
        assert_eq!(face.vertices.len(), 3);
        assert_eq!(face.vertices[1], Coordinate::new_3d(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_read_dimension_linear_point_optional() {
        let entities = read(
            "0\nDIMENSION\n10\n0\n20\n0\n11\n5\n21\n1\n70\n32\n1\n<>\n\
             0\nDIMENSION\n10\n0\n20\n0\n11\n5\n21\n1\n13\n10\n23\n0\n",
        );
        let EntityType::Dimension(first) = &entities[0] else {
            panic!("expected a dimension");
        };
        assert_eq!(first.dimension_type, 32);
        assert_eq!(first.text.as_deref(), Some("<>"));
        assert!(first.linear_point.is_none());

        let EntityType::Dimension(second) = &entities[1] else {
            panic!("expected a dimension");
        };
        assert_eq!(second.linear_point, Some(Coordinate::new(10.0, 0.0)));
    }

    #[test]
    fn test_unknown_entities_skipped_with_notification() {
        let mut notes = NotificationCollection::new();
        let entities = EntityReader::new(&mut notes)
            .read(&tokenize("0\nVIEWPORT\n10\n0\n0\nPOINT\n10\n1\n20\n1\n"));
        assert_eq!(entities.len(), 1);
        assert!(notes.has_type(NotificationType::NotSupported));
    }

    #[test]
    fn test_malformed_number_coerced_to_zero() {
        let mut notes = NotificationCollection::new();
        let entities =
            EntityReader::new(&mut notes).read(&tokenize("0\nCIRCLE\n10\n1\n20\n1\n40\nabc\n"));
        let EntityType::Circle(circle) = &entities[0] else {
            panic!("expected a circle");
        };
        assert_eq!(circle.radius, 0.0);
        assert!(notes.has_type(NotificationType::Error));
    }

    #[test]
    fn test_decode_caret_escapes() {
        assert_eq!(decode_caret_escapes("a^Jb^Ic^ d"), "a\nb\tc^d");
        assert_eq!(decode_caret_escapes("x^"), "x^");
        assert_eq!(decode_caret_escapes("plain"), "plain");
    }
}
