//! Block reference entity

use super::{impl_entity, EntityCommon};
use crate::types::Coordinate;

/// Largest array (rows × columns) expanded cell by cell
pub const MAX_ARRAY_CELLS: usize = 65_536;

/// A block reference (INSERT), optionally repeated as a rectangular array
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Common entity data
    pub common: EntityCommon,
    /// Referenced block name (code 2)
    pub block_name: String,
    /// Insertion point (codes 10/20/30)
    pub insertion: Coordinate,
    /// X scale factor (code 41)
    pub x_scale: f64,
    /// Y scale factor (code 42)
    pub y_scale: f64,
    /// Z scale factor (code 43)
    pub z_scale: f64,
    /// Rotation in degrees (code 50)
    pub rotation: f64,
    /// Column count (code 70)
    pub column_count: u32,
    /// Row count (code 71)
    pub row_count: u32,
    /// Column spacing (code 44)
    pub column_spacing: f64,
    /// Row spacing (code 45)
    pub row_spacing: f64,
}

impl Insert {
    /// Create a reference to `block_name` at `insertion` with unit scale
    pub fn new(block_name: impl Into<String>, insertion: Coordinate) -> Self {
        Insert {
            block_name: block_name.into(),
            insertion,
            ..Default::default()
        }
    }

    /// Scale factors as a tuple
    pub fn scale(&self) -> (f64, f64, f64) {
        (self.x_scale, self.y_scale, self.z_scale)
    }

    /// Check whether the reference is repeated as an array
    pub fn is_array(&self) -> bool {
        self.column_count > 1 || self.row_count > 1
    }

    /// Number of array cells, `None` when it exceeds [`MAX_ARRAY_CELLS`]
    pub fn cell_count(&self) -> Option<usize> {
        let columns = usize::try_from(self.column_count.max(1)).ok()?;
        let rows = usize::try_from(self.row_count.max(1)).ok()?;
        columns
            .checked_mul(rows)
            .filter(|&count| count <= MAX_ARRAY_CELLS)
    }

    /// Insertion point of every array cell, row by row.
    ///
    /// Cell offsets follow the rotated block axes. A plain reference, or an
    /// array too large to expand, yields its own insertion point once.
    pub fn cell_insertion_points(&self) -> Vec<Coordinate> {
        let Some(count) = self.cell_count() else {
            return vec![self.insertion];
        };
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let columns = self.column_count.max(1);
        let rows = self.row_count.max(1);
        let mut points = Vec::with_capacity(count);

        for row in 0..rows {
            for column in 0..columns {
                if row == 0 && column == 0 {
                    points.push(self.insertion);
                    continue;
                }
                let dx = f64::from(column) * self.column_spacing;
                let dy = f64::from(row) * self.row_spacing;
                points.push(Coordinate {
                    x: self.insertion.x + dx * cos - dy * sin,
                    y: self.insertion.y + dx * sin + dy * cos,
                    z: self.insertion.z,
                });
            }
        }
        points
    }
}

impl Default for Insert {
    fn default() -> Self {
        Insert {
            common: EntityCommon::new(),
            block_name: String::new(),
            insertion: Coordinate::default(),
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
        }
    }
}

impl_entity!(Insert, "INSERT");
