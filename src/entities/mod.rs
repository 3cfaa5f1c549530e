//! Typed DXF entities
//!
//! Every drawable record parsed from an ENTITIES section or a block body
//! becomes one [`EntityType`] value. The set of kinds is closed: parsing and
//! conversion both match over it exhaustively.

macro_rules! impl_entity {
    ($ty:ty, $name:literal) => {
        impl $crate::entities::Entity for $ty {
            fn common(&self) -> &$crate::entities::EntityCommon {
                &self.common
            }

            fn entity_type(&self) -> &'static str {
                $name
            }
        }
    };
}
pub(crate) use impl_entity;

pub mod arc;
pub mod block;
pub mod circle;
pub mod dimension;
pub mod ellipse;
pub mod face3d;
pub mod hatch;
pub mod insert;
pub mod line;
pub mod lwpolyline;
pub mod mtext;
pub mod point;
pub mod polyline;
pub mod solid;
pub mod spline;
pub mod text;

pub use arc::Arc;
pub use block::Block;
pub use circle::Circle;
pub use dimension::Dimension;
pub use ellipse::Ellipse;
pub use face3d::Face3D;
pub use hatch::{BoundaryPath, BoundaryPathFlags, Hatch, HatchEdge};
pub use insert::Insert;
pub use line::Line;
pub use lwpolyline::LwPolyline;
pub use mtext::MText;
pub use point::Point;
pub use polyline::{Polyline, PolylineFlags, PolylineVertex};
pub use solid::Solid;
pub use spline::{Spline, SplineFlags};
pub use text::Text;

/// Properties shared by every entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Handle (group code 5)
    pub handle: Option<String>,
    /// Layer name (group code 8)
    pub layer: String,
    /// Color index (group code 62), `None` when not given
    pub color_index: Option<i32>,
    /// Line type name (group code 6)
    pub line_type: Option<String>,
    /// Line weight in 1/100 mm (group code 370)
    pub line_weight: Option<i32>,
    /// Visibility (group code 60, 0 = visible)
    pub visible: bool,
}

impl EntityCommon {
    /// Create common entity data with default values
    pub fn new() -> Self {
        EntityCommon {
            handle: None,
            layer: "0".to_string(),
            color_index: None,
            line_type: None,
            line_weight: None,
            visible: true,
        }
    }

    /// Create common entity data on a given layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all entities
pub trait Entity {
    /// Shared entity properties
    fn common(&self) -> &EntityCommon;

    /// DXF type name (`LINE`, `3DFACE`, ...)
    fn entity_type(&self) -> &'static str;

    /// Get the entity's layer name
    fn layer(&self) -> &str {
        &self.common().layer
    }

    /// Check if the entity is visible
    fn is_visible(&self) -> bool {
        self.common().visible
    }
}

/// Enumeration of all supported entity kinds
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Line(Line),
    Point(Point),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    LwPolyline(LwPolyline),
    Polyline(Polyline),
    Spline(Spline),
    Text(Text),
    MText(MText),
    Insert(Insert),
    Face3D(Face3D),
    Solid(Solid),
    Hatch(Hatch),
    Dimension(Dimension),
}

impl EntityType {
    /// Get a reference to the entity as a trait object
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Line(e) => e,
            EntityType::Point(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::MText(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Face3D(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Hatch(e) => e,
            EntityType::Dimension(e) => e,
        }
    }

    /// Shared entity properties
    pub fn common(&self) -> &EntityCommon {
        self.as_entity().common()
    }

    /// DXF type name
    pub fn entity_type(&self) -> &'static str {
        self.as_entity().entity_type()
    }
}
