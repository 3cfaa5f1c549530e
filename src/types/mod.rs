//! Basic value types shared by the parsers and the feature converter

pub mod color;
pub mod coordinate;
pub mod transform;
pub mod version;

pub use color::{aci_to_hex, resolve_color_index, BY_BLOCK, BY_LAYER, DEFAULT_COLOR_INDEX};
pub use coordinate::Coordinate;
pub use transform::InsertTransform;
pub use version::{DxfVersion, Units};
