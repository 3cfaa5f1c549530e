//! Layer table entry

use super::TableEntry;
use crate::types::DEFAULT_COLOR_INDEX;
use bitflags::bitflags;

bitflags! {
    /// Standard flags of a LAYER record (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayerFlags: i32 {
        /// Layer is frozen
        const FROZEN = 1;
        /// Layer is frozen by default in new viewports
        const FROZEN_IN_NEW_VIEWPORTS = 2;
        /// Layer is locked
        const LOCKED = 4;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name
    pub name: String,
    /// Color index; negative when the layer is switched off
    pub color_index: i32,
    /// Raw flags
    pub flags: LayerFlags,
    /// Line type name
    pub line_type: Option<String>,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color_index: DEFAULT_COLOR_INDEX,
            flags: LayerFlags::empty(),
            line_type: None,
        }
    }

    /// Set the color index
    pub fn with_color_index(mut self, color_index: i32) -> Self {
        self.color_index = color_index;
        self
    }

    /// Set the flags
    pub fn with_flags(mut self, flags: LayerFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Entities on a frozen layer are not drawn
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerFlags::FROZEN)
    }

    /// A layer is off when its color index is negative
    pub fn is_off(&self) -> bool {
        self.color_index < 0
    }

    /// Check whether the layer is locked
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerFlags::LOCKED)
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("0");
        assert_eq!(layer.color_index, 7);
        assert!(!layer.is_frozen());
        assert!(!layer.is_off());
    }

    #[test]
    fn test_layer_state() {
        let layer = Layer::new("Hidden")
            .with_color_index(-5)
            .with_flags(LayerFlags::FROZEN | LayerFlags::LOCKED);
        assert!(layer.is_frozen());
        assert!(layer.is_off());
        assert!(layer.is_locked());
    }
}
