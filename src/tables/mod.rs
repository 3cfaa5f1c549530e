//! Name-keyed symbol tables

use indexmap::IndexMap;

pub mod layer;
pub mod linetype;
pub mod textstyle;

pub use layer::{Layer, LayerFlags};
pub use linetype::LineType;
pub use textstyle::TextStyle;

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name
    fn name(&self) -> &str;
}

/// Generic table for storing named entries.
///
/// Lookups are case-insensitive; iteration follows definition order.
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    /// Entries stored by upper-cased name
    entries: IndexMap<String, T, ahash::RandomState>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table
    pub fn new() -> Self {
        Table {
            entries: IndexMap::with_hasher(ahash::RandomState::new()),
        }
    }

    /// Add an entry, replacing any earlier entry with the same name.
    ///
    /// Returns the replaced entry.
    pub fn insert(&mut self, entry: T) -> Option<T> {
        let key = entry.name().to_uppercase();
        self.entries.insert(key, entry)
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableEntry> FromIterator<T> for Table<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Table::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// The three symbol tables consumed by the converter
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// LAYER table
    pub layers: Table<Layer>,
    /// LTYPE table
    pub line_types: Table<LineType>,
    /// STYLE table
    pub styles: Table<TextStyle>,
}

impl Tables {
    /// Create empty tables
    pub fn new() -> Self {
        Self::default()
    }
}
