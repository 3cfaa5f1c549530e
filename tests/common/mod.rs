//! Shared test utilities for dxf-features integration tests.
//!
//! [`DxfBuilder`] assembles ASCII DXF text section by section so tests can
//! state drawings as a handful of records instead of raw pair listings.

#![allow(dead_code)]

use dxf_features::{DxfReader, DxfReaderConfiguration, Feature};

/// Incremental ASCII DXF writer for test drawings
#[derive(Debug, Default)]
pub struct DxfBuilder {
    header: Vec<(i32, String)>,
    tables: Vec<(i32, String)>,
    blocks: Vec<(i32, String)>,
    entities: Vec<(i32, String)>,
}

impl DxfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header variable with its value pairs
    pub fn header_var(mut self, name: &str, pairs: &[(i32, &str)]) -> Self {
        self.header.push((9, name.to_string()));
        push_pairs(&mut self.header, pairs);
        self
    }

    /// Add a LAYER table entry
    pub fn layer(mut self, name: &str, color: i32, flags: i32) -> Self {
        self.tables.push((0, "LAYER".to_string()));
        self.tables.push((2, name.to_string()));
        self.tables.push((62, color.to_string()));
        self.tables.push((70, flags.to_string()));
        self
    }

    /// Add a block definition holding the given entity records
    pub fn block(mut self, name: &str, base: (f64, f64), entities: &[Vec<(i32, String)>]) -> Self {
        self.blocks.push((0, "BLOCK".to_string()));
        self.blocks.push((2, name.to_string()));
        self.blocks.push((10, base.0.to_string()));
        self.blocks.push((20, base.1.to_string()));
        for record in entities {
            self.blocks.extend(record.iter().cloned());
        }
        self.blocks.push((0, "ENDBLK".to_string()));
        self
    }

    /// Add a top-level entity record
    pub fn entity(mut self, record: Vec<(i32, String)>) -> Self {
        self.entities.extend(record);
        self
    }

    /// Render with LF line endings
    pub fn build(&self) -> String {
        let mut pairs = Vec::new();
        section(&mut pairs, "HEADER", &self.header);
        if !self.tables.is_empty() {
            let mut tables = vec![(0, "TABLE".to_string()), (2, "LAYER".to_string())];
            tables.extend(self.tables.iter().cloned());
            tables.push((0, "ENDTAB".to_string()));
            section(&mut pairs, "TABLES", &tables);
        }
        section(&mut pairs, "BLOCKS", &self.blocks);
        section(&mut pairs, "ENTITIES", &self.entities);
        pairs.push((0, "EOF".to_string()));

        pairs
            .iter()
            .map(|(code, value)| format!("{code}\n{value}\n"))
            .collect()
    }

    /// Render with CRLF line endings and right-aligned codes
    pub fn build_crlf(&self) -> String {
        self.build()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                if i % 2 == 0 {
                    format!("{line:>3}\r\n")
                } else {
                    format!("{line}\r\n")
                }
            })
            .collect()
    }
}

fn push_pairs(target: &mut Vec<(i32, String)>, pairs: &[(i32, &str)]) {
    target.extend(pairs.iter().map(|(c, v)| (*c, v.to_string())));
}

fn section(pairs: &mut Vec<(i32, String)>, name: &str, body: &[(i32, String)]) {
    pairs.push((0, "SECTION".to_string()));
    pairs.push((2, name.to_string()));
    pairs.extend(body.iter().cloned());
    pairs.push((0, "ENDSEC".to_string()));
}

/// Build an entity record from a type name and code/value pairs
pub fn record(kind: &str, pairs: &[(i32, &str)]) -> Vec<(i32, String)> {
    let mut out = vec![(0, kind.to_string())];
    push_pairs(&mut out, pairs);
    out
}

pub fn line(layer: &str, start: (f64, f64), end: (f64, f64)) -> Vec<(i32, String)> {
    vec![
        (0, "LINE".to_string()),
        (8, layer.to_string()),
        (10, start.0.to_string()),
        (20, start.1.to_string()),
        (11, end.0.to_string()),
        (21, end.1.to_string()),
    ]
}

pub fn insert(block: &str, at: (f64, f64), scale: f64, rotation: f64) -> Vec<(i32, String)> {
    vec![
        (0, "INSERT".to_string()),
        (2, block.to_string()),
        (10, at.0.to_string()),
        (20, at.1.to_string()),
        (41, scale.to_string()),
        (42, scale.to_string()),
        (50, rotation.to_string()),
    ]
}

/// Convert DXF text with the given configuration
pub fn features_with(text: &str, config: DxfReaderConfiguration) -> Vec<Feature> {
    DxfReader::from_text(text)
        .with_configuration(config)
        .read_features()
        .expect("valid configuration")
}

/// Convert DXF text with the default configuration
pub fn features(text: &str) -> Vec<Feature> {
    features_with(text, DxfReaderConfiguration::default())
}

/// Coordinates of a geometry as `[x, y]` / `[x, y, z]` JSON arrays
pub fn coordinates_json(feature: &Feature) -> serde_json::Value {
    serde_json::to_value(&feature.geometry).expect("serializable")["coordinates"].clone()
}
