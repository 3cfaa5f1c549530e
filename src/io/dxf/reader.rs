//! DXF reader facade and configuration

mod block_reader;
mod entity_reader;
mod hatch_reader;
mod header_reader;
mod table_reader;

use block_reader::BlockReader;
use entity_reader::EntityReader;
use header_reader::HeaderReader;
use table_reader::TableReader;

use super::{decode_dxf_bytes, split_sections, tokenize, GroupPair};
use crate::document::{DxfDocument, Header};
use crate::entities::{Block, EntityType};
use crate::error::{DxfError, Result};
use crate::features::{Feature, FeatureConverter, FeatureTable, OutputShape};
use crate::notification::NotificationCollection;
use crate::tables::{Table, Tables};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Configuration for reading and converting a DXF document.
///
/// Deserializes from camelCase keys; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DxfReaderConfiguration {
    /// Output table shape.
    ///
    /// Default: `geojson-table`
    pub shape: OutputShape,
    /// Segments used for a full circle; arcs, ellipses and bulges use a
    /// proportional share.
    ///
    /// Default: 72
    pub circle_segments: usize,
    /// Samples per B-spline span.
    ///
    /// Default: 20
    pub spline_segments_per_span: usize,
    /// Expand INSERT entities into the referenced block's geometry.
    ///
    /// Default: `true`
    pub inline_block_references: bool,
    /// Maximum nesting depth of block expansion.
    ///
    /// Default: 8
    pub max_block_insertion_depth: usize,
    /// Entity type allow-list; `None` or empty keeps every type
    pub entity_types: Option<Vec<String>>,
    /// Layer allow-list; `None` or empty keeps every layer
    pub layers: Option<Vec<String>>,
    /// Keep entities flagged invisible.
    ///
    /// Default: `false`
    pub include_invisible: bool,
    /// Keep entities on frozen layers.
    ///
    /// Default: `false`
    pub include_frozen_layers: bool,
    /// Keep Z components in output coordinates.
    ///
    /// Default: `true`
    #[serde(rename = "include3D")]
    pub include_3d: bool,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            shape: OutputShape::default(),
            circle_segments: 72,
            spline_segments_per_span: 20,
            inline_block_references: true,
            max_block_insertion_depth: 8,
            entity_types: None,
            layers: None,
            include_invisible: false,
            include_frozen_layers: false,
            include_3d: true,
        }
    }
}

impl DxfReaderConfiguration {
    /// Reject settings that cannot produce geometry
    pub fn validate(&self) -> Result<()> {
        if self.circle_segments == 0 {
            return Err(DxfError::InvalidConfiguration(
                "circleSegments must be at least 1".to_string(),
            ));
        }
        if self.spline_segments_per_span == 0 {
            return Err(DxfError::InvalidConfiguration(
                "splineSegmentsPerSpan must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the output shape
    pub fn with_shape(mut self, shape: OutputShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the full-circle segment count
    pub fn with_circle_segments(mut self, segments: usize) -> Self {
        self.circle_segments = segments;
        self
    }

    /// Set the per-span spline sample count
    pub fn with_spline_segments_per_span(mut self, segments: usize) -> Self {
        self.spline_segments_per_span = segments;
        self
    }

    /// Enable or disable block expansion
    pub fn with_inline_block_references(mut self, inline: bool) -> Self {
        self.inline_block_references = inline;
        self
    }

    /// Set the block expansion depth limit
    pub fn with_max_block_insertion_depth(mut self, depth: usize) -> Self {
        self.max_block_insertion_depth = depth;
        self
    }

    /// Restrict output to the given entity types
    pub fn with_entity_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict output to the given layers
    pub fn with_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = Some(layers.into_iter().map(Into::into).collect());
        self
    }

    /// Keep or drop invisible entities
    pub fn with_include_invisible(mut self, include: bool) -> Self {
        self.include_invisible = include;
        self
    }

    /// Keep or drop entities on frozen layers
    pub fn with_include_frozen_layers(mut self, include: bool) -> Self {
        self.include_frozen_layers = include;
        self
    }

    /// Keep or strip Z components
    pub fn with_include_3d(mut self, include: bool) -> Self {
        self.include_3d = include;
        self
    }
}

/// DXF text reader
#[derive(Debug, Clone)]
pub struct DxfReader {
    text: String,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a reader over DXF text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Create a reader over raw DXF bytes.
    ///
    /// UTF-8 input is used as is; anything else is decoded with the code page
    /// named by `$DWGCODEPAGE`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(decode_dxf_bytes(bytes).into_owned())
    }

    /// Create a reader from any byte source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut buf_reader = BufReader::new(reader);
        let mut bytes = Vec::new();
        buf_reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Create a reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn configuration(&self) -> &DxfReaderConfiguration {
        &self.config
    }

    /// Parse the text into its structural model
    pub fn read(&self) -> DxfDocument {
        let pairs = tokenize(&self.text);
        let mut document = DxfDocument::new();
        let sections = split_sections(&pairs, &mut document.notifications);

        document.header = parse_header(&sections.header, &mut document.notifications);
        document.tables = parse_tables(&sections.tables, &mut document.notifications);
        document.blocks = parse_blocks(&sections.blocks, &mut document.notifications);
        document.entities = parse_entities(&sections.entities, &mut document.notifications);

        log::debug!(
            "read {} pairs: {} layers, {} blocks, {} entities",
            pairs.len(),
            document.tables.layers.len(),
            document.blocks.len(),
            document.entities.len()
        );
        document
    }

    /// Parse and convert to features
    pub fn read_features(&self) -> Result<Vec<Feature>> {
        self.read_features_with_notifications()
            .map(|(features, _)| features)
    }

    /// Parse and convert to features, returning the notifications of both
    /// the read and the conversion (in that order)
    pub fn read_features_with_notifications(
        &self,
    ) -> Result<(Vec<Feature>, NotificationCollection)> {
        self.config.validate()?;
        let mut document = self.read();
        let mut converter = FeatureConverter::new(&document, &self.config);
        let features = converter.convert();
        let mut conversion = converter.into_notifications();

        let mut notifications = std::mem::take(&mut document.notifications);
        notifications.append(&mut conversion);
        Ok((features, notifications))
    }

    /// Parse, convert and package the features in the configured shape
    pub fn read_table(&self) -> Result<FeatureTable> {
        let features = self.read_features()?;
        Ok(FeatureTable::from_features(self.config.shape, features))
    }
}

/// Parse HEADER section pairs
pub fn parse_header(pairs: &[GroupPair], notifications: &mut NotificationCollection) -> Header {
    HeaderReader::new(notifications).read(pairs)
}

/// Parse TABLES section pairs into the layer, line type and style tables
pub fn parse_tables(pairs: &[GroupPair], notifications: &mut NotificationCollection) -> Tables {
    TableReader::new(notifications).read(pairs)
}

/// Parse BLOCKS section pairs into block definitions
pub fn parse_blocks(
    pairs: &[GroupPair],
    notifications: &mut NotificationCollection,
) -> Table<Block> {
    BlockReader::new(notifications).read(pairs)
}

/// Parse entity pairs (an ENTITIES section or a block body)
pub fn parse_entities(
    pairs: &[GroupPair],
    notifications: &mut NotificationCollection,
) -> Vec<EntityType> {
    EntityReader::new(notifications).read(pairs)
}
