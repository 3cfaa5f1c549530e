//! Output table shapes

use super::Feature;
use crate::error::DxfError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

/// How converted features are packaged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputShape {
    /// GeoJSON feature collection (`geojson-table`)
    #[default]
    GeojsonTable,
    /// Flat list of feature rows (`object-row-table`)
    ObjectRowTable,
}

impl OutputShape {
    /// Shape name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputShape::GeojsonTable => "geojson-table",
            OutputShape::ObjectRowTable => "object-row-table",
        }
    }
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputShape {
    type Err = DxfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geojson-table" => Ok(OutputShape::GeojsonTable),
            "object-row-table" => Ok(OutputShape::ObjectRowTable),
            other => Err(DxfError::UnsupportedShape(other.to_string())),
        }
    }
}

impl TryFrom<String> for OutputShape {
    type Error = DxfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OutputShape> for String {
    fn from(shape: OutputShape) -> Self {
        shape.as_str().to_string()
    }
}

/// Converted features packaged in one of the output shapes
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureTable {
    /// A GeoJSON feature collection
    GeojsonTable {
        /// Features in source order
        features: Vec<Feature>,
    },
    /// Feature rows
    ObjectRowTable {
        /// Features in source order
        data: Vec<Feature>,
    },
}

impl FeatureTable {
    /// Package `features` in the given shape
    pub fn from_features(shape: OutputShape, features: Vec<Feature>) -> Self {
        match shape {
            OutputShape::GeojsonTable => FeatureTable::GeojsonTable { features },
            OutputShape::ObjectRowTable => FeatureTable::ObjectRowTable { data: features },
        }
    }

    /// The shape of this table
    pub fn shape(&self) -> OutputShape {
        match self {
            FeatureTable::GeojsonTable { .. } => OutputShape::GeojsonTable,
            FeatureTable::ObjectRowTable { .. } => OutputShape::ObjectRowTable,
        }
    }

    /// The packaged features
    pub fn features(&self) -> &[Feature] {
        match self {
            FeatureTable::GeojsonTable { features } => features,
            FeatureTable::ObjectRowTable { data } => data,
        }
    }

    /// Unwrap into the feature list
    pub fn into_features(self) -> Vec<Feature> {
        match self {
            FeatureTable::GeojsonTable { features } => features,
            FeatureTable::ObjectRowTable { data } => data,
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self, pretty: bool) -> crate::error::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl Serialize for FeatureTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureTable::GeojsonTable { features } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("shape", self.shape().as_str())?;
                map.serialize_entry("type", "FeatureCollection")?;
                map.serialize_entry("features", features)?;
                map.end()
            }
            FeatureTable::ObjectRowTable { data } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("shape", self.shape().as_str())?;
                map.serialize_entry("data", data)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Geometry;
    use crate::types::Coordinate;
    use serde_json::json;

    #[test]
    fn test_shape_from_str() {
        assert_eq!(
            "geojson-table".parse::<OutputShape>().ok(),
            Some(OutputShape::GeojsonTable)
        );
        assert_eq!(
            "object-row-table".parse::<OutputShape>().ok(),
            Some(OutputShape::ObjectRowTable)
        );
        assert!(matches!(
            "columnar-table".parse::<OutputShape>(),
            Err(DxfError::UnsupportedShape(name)) if name == "columnar-table"
        ));
    }

    #[test]
    fn test_table_json_shapes() {
        let features = vec![Feature::new(Geometry::Point(Coordinate::new(1.0, 2.0)))];

        let table = FeatureTable::from_features(OutputShape::GeojsonTable, features.clone());
        let value = serde_json::to_value(&table).expect("serializable");
        assert_eq!(value["shape"], "geojson-table");
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([1.0, 2.0]));

        let table = FeatureTable::from_features(OutputShape::ObjectRowTable, features);
        let value = serde_json::to_value(&table).expect("serializable");
        assert_eq!(value["shape"], "object-row-table");
        assert_eq!(value["data"].as_array().map(Vec::len), Some(1));
        assert!(value.get("type").is_none());
    }

    #[test]
    fn test_to_json() {
        let table = FeatureTable::from_features(OutputShape::GeojsonTable, Vec::new());
        let json = table.to_json(false).expect("serializable");
        assert_eq!(
            json,
            r#"{"shape":"geojson-table","type":"FeatureCollection","features":[]}"#
        );
    }
}
