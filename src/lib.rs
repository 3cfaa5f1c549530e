//! # dxf-features
//!
//! A pure Rust library for converting ASCII DXF drawings into tessellated
//! geometric features (points, line strings, polygons and multipolygons)
//! ready for map and GIS style rendering.
//!
//! ## Features
//!
//! - Tolerant ASCII DXF reading (CRLF/LF, code-page aware byte decoding)
//! - HEADER, TABLES (layers, line types, text styles), BLOCKS and ENTITIES
//! - 15 entity kinds including HATCH boundaries and DIMENSION anchors
//! - Arc, ellipse, bulge and NURBS tessellation
//! - Recursive block expansion with MINSERT arrays
//! - GeoJSON-style or object-row feature tables serialized with serde
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_features::{DxfReader, DxfReaderConfiguration};
//!
//! let config = DxfReaderConfiguration::default().with_circle_segments(36);
//! let table = DxfReader::from_file("plan.dxf")?
//!     .with_configuration(config)
//!     .read_table()?;
//!
//! for feature in table.features() {
//!     println!("{} on {:?}", feature.geometry.type_name(), feature.property_str("layer"));
//! }
//! # Ok::<(), dxf_features::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `io::dxf` - tokenizer, section splitter and section parsers
//! - `DxfDocument` - structural model of one file
//! - `FeatureConverter` - entity filtering, tessellation and block expansion
//! - `FeatureTable` - the output container

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod features;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

use rayon::prelude::*;

// Re-export commonly used types
pub use document::{DxfDocument, Header};
pub use error::{DxfError, Result};
pub use features::{Feature, FeatureConverter, FeatureTable, Geometry, OutputShape};
pub use io::dxf::{DxfReader, DxfReaderConfiguration};
pub use types::Coordinate;

// Re-export entity types
pub use entities::{
    Arc, Circle, Dimension, Ellipse, Entity, EntityType, Face3D, Hatch, Insert, Line, LwPolyline,
    MText, Point, Polyline, Solid, Spline, Text,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse DXF text into a feature table.
///
/// The only failure is an invalid configuration; malformed input degrades
/// to fewer features and notifications on the log.
pub fn parse_dxf(text: &str, config: &DxfReaderConfiguration) -> Result<FeatureTable> {
    DxfReader::from_text(text)
        .with_configuration(config.clone())
        .read_table()
}

/// Parse several independent DXF texts in parallel.
///
/// Results are returned in input order.
pub fn parse_dxf_batch(texts: &[&str], config: &DxfReaderConfiguration) -> Vec<Result<FeatureTable>> {
    texts
        .par_iter()
        .map(|text| parse_dxf(text, config))
        .collect()
}
