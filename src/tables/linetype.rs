//! Line type table entry

use super::TableEntry;

/// A line type (LTYPE) table entry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Descriptive text, e.g. `__ __ __`
    pub description: Option<String>,
    /// Total pattern length (code 40)
    pub pattern_length: f64,
    /// Dash, dot or space lengths (code 49, in order)
    pub elements: Vec<f64>,
}

impl LineType {
    /// Create a new line type
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }
}
