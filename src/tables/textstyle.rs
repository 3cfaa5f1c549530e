//! Text style table entry

use super::TableEntry;

/// A text style (STYLE) table entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    /// Style name
    pub name: String,
    /// Font file or family name
    pub font_name: Option<String>,
    /// Fixed text height, 0 when variable
    pub height: f64,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>) -> Self {
        TextStyle {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl TableEntry for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }
}
