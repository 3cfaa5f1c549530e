//! Geometric features
//!
//! A [`Feature`] pairs one geometry with a property map, the unit of output
//! of the converter. Geometries and features serialize as GeoJSON.

mod converter;
pub mod mtext_format;
pub mod output;

pub use converter::FeatureConverter;
pub use mtext_format::strip_mtext_formatting;
pub use output::{FeatureTable, OutputShape};

use crate::types::Coordinate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Feature geometry with 2D or 3D coordinates
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// A single position
    Point(Coordinate),
    /// An open polyline
    LineString(Vec<Coordinate>),
    /// Rings; the first is the outer boundary
    Polygon(Vec<Vec<Coordinate>>),
    /// Polygons, each a list of rings
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

impl Geometry {
    /// GeoJSON type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Apply `f` to every coordinate in place
    pub fn for_each_coordinate_mut(&mut self, mut f: impl FnMut(&mut Coordinate)) {
        match self {
            Geometry::Point(point) => f(point),
            Geometry::LineString(points) => points.iter_mut().for_each(f),
            Geometry::Polygon(rings) => rings.iter_mut().flatten().for_each(f),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter_mut().flatten().flatten().for_each(f)
            }
        }
    }

    /// All coordinates in order
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match self {
            Geometry::Point(point) => vec![*point],
            Geometry::LineString(points) => points.clone(),
            Geometry::Polygon(rings) => rings.iter().flatten().copied().collect(),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().flatten().flatten().copied().collect()
            }
        }
    }
}

/// A geometry with its properties
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// The geometry
    pub geometry: Geometry,
    /// Property map (`layer`, `entityType`, `color`, ...)
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature without properties
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: Map::new(),
        }
    }

    /// Set a property
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Get a property
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Get a string property
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", "Feature")?;
        map.serialize_entry("geometry", &self.geometry)?;
        map.serialize_entry("properties", &self.properties)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_serializes_as_geojson() {
        let feature = Feature::new(Geometry::LineString(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new_3d(10.0, 5.0, 1.0),
        ]))
        .with_property("layer", "0");

        let value = serde_json::to_value(&feature).expect("serializable");
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [10.0, 5.0, 1.0]]},
                "properties": {"layer": "0"}
            })
        );
    }

    #[test]
    fn test_for_each_coordinate_mut() {
        let mut geometry = Geometry::MultiPolygon(vec![
            vec![vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)]],
            vec![vec![Coordinate::new(3.0, 3.0)]],
        ]);
        geometry.for_each_coordinate_mut(|c| c.x += 1.0);
        let xs: Vec<f64> = geometry.coordinates().iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(geometry.type_name(), "MultiPolygon");
    }

    #[test]
    fn test_property_accessors() {
        let feature = Feature::new(Geometry::Point(Coordinate::new(0.0, 0.0)))
            .with_property("text", "Hello")
            .with_property("textHeight", 2.5);
        assert_eq!(feature.property_str("text"), Some("Hello"));
        assert_eq!(feature.property("textHeight"), Some(&json!(2.5)));
        assert!(feature.property("missing").is_none());
    }
}
