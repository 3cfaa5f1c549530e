//! Entity to feature conversion

use super::{strip_mtext_formatting, Feature, Geometry};
use crate::document::DxfDocument;
use crate::entities::*;
use crate::geometry::{
    bulge_to_arc_points, evaluate_bspline, tessellate_arc, tessellate_arc_radians,
    tessellate_circle, tessellate_ellipse, EPSILON,
};
use crate::io::dxf::DxfReaderConfiguration;
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{aci_to_hex, resolve_color_index, Coordinate, InsertTransform};

/// Converts the entities of a document into features.
///
/// Top-level entities are filtered by the configured allow-lists and the
/// visibility and frozen-layer switches, converted by kind and then given
/// the shared properties of the entity they came from. INSERT entities
/// expand their block recursively up to the configured depth.
pub struct FeatureConverter<'a> {
    document: &'a DxfDocument,
    config: &'a DxfReaderConfiguration,
    notifications: NotificationCollection,
}

impl<'a> FeatureConverter<'a> {
    /// Create a converter over a parsed document
    pub fn new(document: &'a DxfDocument, config: &'a DxfReaderConfiguration) -> Self {
        Self {
            document,
            config,
            notifications: NotificationCollection::new(),
        }
    }

    /// Notifications recorded by the last conversion
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Consume the converter, keeping its notifications
    pub fn into_notifications(self) -> NotificationCollection {
        self.notifications
    }

    /// Convert every top-level entity, in file order
    pub fn convert(&mut self) -> Vec<Feature> {
        let document = self.document;
        let mut features = Vec::new();

        for entity in &document.entities {
            if !self.should_include(entity) {
                continue;
            }
            for mut feature in self.convert_entity(entity, 0) {
                self.add_entity_properties(&mut feature, entity);
                if !self.config.include_3d {
                    feature
                        .geometry
                        .for_each_coordinate_mut(|c| *c = c.to_2d());
                }
                features.push(feature);
            }
        }

        log::debug!(
            "converted {} entities into {} features",
            document.entities.len(),
            features.len()
        );
        features
    }

    /// Check a top-level entity against the configured filters
    pub fn should_include(&self, entity: &EntityType) -> bool {
        let entity = entity.as_entity();

        if let Some(types) = self.config.entity_types.as_ref().filter(|t| !t.is_empty()) {
            if !types.iter().any(|t| t == entity.entity_type()) {
                return false;
            }
        }

        if let Some(layers) = self.config.layers.as_ref().filter(|l| !l.is_empty()) {
            if !layers.iter().any(|l| l == entity.layer()) {
                return false;
            }
        }

        if !self.config.include_invisible && !entity.is_visible() {
            return false;
        }

        if !self.config.include_frozen_layers {
            let frozen = self
                .document
                .tables
                .layers
                .get(entity.layer())
                .is_some_and(|layer| layer.is_frozen());
            if frozen {
                return false;
            }
        }

        true
    }

    /// Convert one entity at the given block nesting depth.
    ///
    /// Returns the features without the shared entity properties.
    pub fn convert_entity(&mut self, entity: &EntityType, depth: usize) -> Vec<Feature> {
        let segments = self.config.circle_segments;
        let feature = match entity {
            EntityType::Line(line) => line_feature(line),
            EntityType::Point(point) => Feature::new(Geometry::Point(point.location)),
            EntityType::Circle(circle) => circle_feature(circle, segments),
            EntityType::Arc(arc) => arc_feature(arc, segments),
            EntityType::Ellipse(ellipse) => ellipse_feature(ellipse, segments),
            EntityType::LwPolyline(polyline) => Feature::new(polyline_geometry(
                &polyline.vertices,
                polyline.is_closed(),
                segments,
            )),
            EntityType::Polyline(polyline) => Feature::new(polyline_geometry(
                &polyline.vertices,
                polyline.is_closed(),
                segments,
            )),
            EntityType::Spline(spline) => {
                spline_feature(spline, self.config.spline_segments_per_span)
            }
            EntityType::Text(text) => text_feature(
                text.insertion,
                &text.value,
                text.height,
                text.rotation,
                text.style.as_deref(),
            ),
            EntityType::MText(mtext) => text_feature(
                mtext.insertion,
                &mtext.value,
                mtext.height,
                mtext.rotation,
                mtext.style.as_deref(),
            )
            .with_property("textWidth", mtext.width),
            EntityType::Face3D(face) => Feature::new(closed_outline(face.vertices.clone())),
            EntityType::Solid(solid) => Feature::new(closed_outline(solid.outline())),
            EntityType::Hatch(hatch) => hatch_feature(hatch, segments),
            EntityType::Dimension(dimension) => return dimension_features(dimension),
            EntityType::Insert(insert) => {
                if !self.config.inline_block_references {
                    return Vec::new();
                }
                return self.convert_insert(insert, depth);
            }
        };
        vec![feature]
    }

    /// Expand a block reference into transformed block features
    fn convert_insert(&mut self, insert: &Insert, depth: usize) -> Vec<Feature> {
        if depth >= self.config.max_block_insertion_depth {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "Block {} not expanded beyond depth {}",
                    insert.block_name, depth
                ),
            );
            return Vec::new();
        }

        let document = self.document;
        let Some(block) = document.block(&insert.block_name) else {
            self.notifications.notify(
                NotificationType::Warning,
                format!("Block {} not found", insert.block_name),
            );
            return Vec::new();
        };

        let mut block_features = Vec::new();
        for entity in &block.entities {
            for mut feature in self.convert_entity(entity, depth + 1) {
                if !feature.properties.contains_key("blockName") {
                    feature = feature.with_property("blockName", block.name.as_str());
                }
                block_features.push(feature);
            }
        }

        if insert.cell_count().is_none() {
            self.notifications.notify(
                NotificationType::Warning,
                format!(
                    "Array of {} x {} cells for block {} too large, inserted once",
                    insert.column_count, insert.row_count, insert.block_name
                ),
            );
        }
        let cells = insert.cell_insertion_points();
        let mut features = Vec::new();
        for cell in cells {
            let transform =
                InsertTransform::new(cell, block.base_point, insert.scale(), insert.rotation);
            features.extend(block_features.iter().cloned().map(|mut feature| {
                feature
                    .geometry
                    .for_each_coordinate_mut(|c| *c = transform.apply(c));
                feature
            }));
        }
        features
    }

    /// Set layer, entity type, color and the optional shared properties
    fn add_entity_properties(&self, feature: &mut Feature, entity: &EntityType) {
        let common = entity.common();
        let layer_color = self
            .document
            .tables
            .layers
            .get(&common.layer)
            .map(|layer| layer.color_index);
        let color_index = resolve_color_index(common.color_index, layer_color);

        let properties = &mut feature.properties;
        properties.insert("layer".into(), common.layer.clone().into());
        properties.insert("entityType".into(), entity.entity_type().into());
        properties.insert("color".into(), aci_to_hex(color_index).into());
        properties.insert("colorIndex".into(), color_index.into());

        if let Some(handle) = common.handle.as_ref().filter(|h| !h.is_empty()) {
            properties.insert("handle".into(), handle.clone().into());
        }
        if let Some(line_type) = common.line_type.as_ref().filter(|l| !l.is_empty()) {
            properties.insert("lineType".into(), line_type.clone().into());
        }
        if let Some(line_weight) = common.line_weight {
            properties.insert("lineWeight".into(), line_weight.into());
        }
    }
}

/// Append the first coordinate unless the ring already ends on it
fn close_ring(ring: &mut Vec<Coordinate>) {
    let (Some(&first), Some(&last)) = (ring.first(), ring.last()) else {
        return;
    };
    if !first.same_xy(&last) {
        ring.push(first);
    }
}

fn line_feature(line: &Line) -> Feature {
    Feature::new(Geometry::LineString(vec![line.start, line.end]))
}

fn circle_feature(circle: &Circle, segments: usize) -> Feature {
    let ring = tessellate_circle(&circle.center, circle.radius, segments);
    Feature::new(Geometry::Polygon(vec![ring]))
}

fn arc_feature(arc: &Arc, segments: usize) -> Feature {
    let points = tessellate_arc(
        &arc.center,
        arc.radius,
        arc.start_angle,
        arc.end_angle,
        segments,
    );
    Feature::new(Geometry::LineString(points))
}

fn ellipse_feature(ellipse: &Ellipse, segments: usize) -> Feature {
    let mut points = tessellate_ellipse(
        &ellipse.center,
        &ellipse.major_axis,
        ellipse.ratio,
        ellipse.start_parameter,
        ellipse.end_parameter,
        segments,
    );
    if ellipse.is_full() {
        close_ring(&mut points);
        Feature::new(Geometry::Polygon(vec![points]))
    } else {
        Feature::new(Geometry::LineString(points))
    }
}

/// Vertex chain with bulge arcs expanded.
///
/// A bulge on the last vertex arcs back to the first one. Closed chains
/// become a polygon ring.
fn polyline_points(vertices: &[PolylineVertex], segments: usize) -> Vec<Coordinate> {
    let mut points = Vec::with_capacity(vertices.len());
    for (i, vertex) in vertices.iter().enumerate() {
        let start = vertex.coordinate();
        points.push(start);
        if vertex.bulge.abs() > EPSILON {
            let next = (i + 1) % vertices.len();
            if next != i {
                points.extend(bulge_to_arc_points(
                    &start,
                    &vertices[next].coordinate(),
                    vertex.bulge,
                    segments,
                ));
            }
        }
    }
    points
}

fn polyline_geometry(vertices: &[PolylineVertex], closed: bool, segments: usize) -> Geometry {
    let mut points = polyline_points(vertices, segments);
    if closed && !points.is_empty() {
        close_ring(&mut points);
        Geometry::Polygon(vec![points])
    } else {
        Geometry::LineString(points)
    }
}

fn spline_feature(spline: &Spline, segments_per_span: usize) -> Feature {
    let points = if !spline.control_points.is_empty() {
        let spans = spline
            .control_points
            .len()
            .saturating_sub(spline.degree)
            .max(1);
        evaluate_bspline(
            spline.degree,
            &spline.control_points,
            &spline.knots,
            &spline.weights,
            spans * segments_per_span + 1,
        )
    } else {
        spline.fit_points.clone()
    };
    Feature::new(Geometry::LineString(points))
}

fn text_feature(
    insertion: Coordinate,
    value: &str,
    height: f64,
    rotation: f64,
    style: Option<&str>,
) -> Feature {
    let feature = Feature::new(Geometry::Point(insertion))
        .with_property("text", strip_mtext_formatting(value))
        .with_property("textHeight", height)
        .with_property("textRotation", rotation);
    match style.filter(|s| !s.is_empty()) {
        Some(style) => feature.with_property("textStyle", style),
        None => feature,
    }
}

/// Ring through all vertices, always closed back to the first one
fn closed_outline(mut ring: Vec<Coordinate>) -> Geometry {
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    Geometry::Polygon(vec![ring])
}

fn hatch_feature(hatch: &Hatch, segments: usize) -> Feature {
    let mut rings: Vec<Vec<Coordinate>> = hatch
        .boundary_paths
        .iter()
        .map(|path| boundary_ring(path, segments))
        .filter(|ring| !ring.is_empty())
        .collect();
    rings.iter_mut().for_each(close_ring);

    let geometry = match rings.len() {
        0 => Geometry::Polygon(vec![Vec::new()]),
        1 => Geometry::Polygon(rings),
        _ => Geometry::MultiPolygon(rings.into_iter().map(|ring| vec![ring]).collect()),
    };
    Feature::new(geometry)
}

fn boundary_ring(path: &BoundaryPath, segments: usize) -> Vec<Coordinate> {
    match path {
        BoundaryPath::Polyline { vertices, .. } => polyline_points(vertices, segments),
        BoundaryPath::Edges { edges, .. } => {
            let mut ring = Vec::new();
            for edge in edges {
                match edge {
                    HatchEdge::Line { start, .. } => ring.push(*start),
                    HatchEdge::CircularArc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                        counter_clockwise,
                    } => ring.extend(tessellate_arc_radians(
                        center,
                        *radius,
                        start_angle.to_radians(),
                        end_angle.to_radians(),
                        *counter_clockwise,
                        segments,
                    )),
                    HatchEdge::EllipticArc {
                        center,
                        major_axis,
                        minor_axis_ratio,
                        start_parameter,
                        end_parameter,
                        counter_clockwise,
                    } => {
                        if *counter_clockwise {
                            ring.extend(tessellate_ellipse(
                                center,
                                major_axis,
                                *minor_axis_ratio,
                                *start_parameter,
                                *end_parameter,
                                segments,
                            ));
                        } else {
                            let mut points = tessellate_ellipse(
                                center,
                                major_axis,
                                *minor_axis_ratio,
                                *end_parameter,
                                *start_parameter,
                                segments,
                            );
                            points.reverse();
                            ring.extend(points);
                        }
                    }
                }
            }
            ring
        }
    }
}

/// Dimension line (when a linear point exists) and text position
fn dimension_features(dimension: &Dimension) -> Vec<Feature> {
    let with_properties = |feature: Feature| {
        let feature = feature
            .with_property("entityType", "DIMENSION")
            .with_property("dimensionType", dimension.dimension_type);
        match &dimension.text {
            Some(text) => feature.with_property("text", text.as_str()),
            None => feature,
        }
    };

    let mut features = Vec::with_capacity(2);
    if let Some(linear_point) = dimension.linear_point {
        features.push(with_properties(Feature::new(Geometry::LineString(vec![
            dimension.definition_point,
            linear_point,
        ]))));
    }
    features.push(with_properties(Feature::new(Geometry::Point(
        dimension.text_middle_point,
    ))));
    features
}
