//! TABLES section reader

use crate::io::dxf::GroupPair;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, LayerFlags, LineType, Tables, TextStyle};
use crate::types::DEFAULT_COLOR_INDEX;

/// Fields collected for one table record before it is routed to its table
#[derive(Debug, Default)]
struct PendingEntry {
    record_type: String,
    name: Option<String>,
    line_type: Option<String>,
    font_name: Option<String>,
    description: Option<String>,
    height: Option<f64>,
    color_index: Option<i32>,
    flags: i32,
    elements: Vec<f64>,
}

/// Reads LAYER, LTYPE and STYLE records.
///
/// `0/TABLE` + `2/<type>` opens a table, every other code 0 marker starts a
/// record (flushing the previous one) and `0/ENDTAB` closes the table.
pub(crate) struct TableReader<'a> {
    notifications: &'a mut NotificationCollection,
    tables: Tables,
    table_type: Option<String>,
    entry: Option<PendingEntry>,
}

impl<'a> TableReader<'a> {
    pub(crate) fn new(notifications: &'a mut NotificationCollection) -> Self {
        Self {
            notifications,
            tables: Tables::new(),
            table_type: None,
            entry: None,
        }
    }

    pub(crate) fn read(mut self, pairs: &[GroupPair]) -> Tables {
        let mut iter = pairs.iter().peekable();

        while let Some(pair) = iter.next() {
            if pair.is_marker("TABLE") {
                self.flush_entry();
                if let Some(type_pair) = iter.next_if(|next| next.code == 2) {
                    self.table_type = Some(type_pair.value.clone());
                }
                continue;
            }

            if pair.is_marker("ENDTAB") {
                self.flush_entry();
                self.table_type = None;
                continue;
            }

            if pair.code == 0 {
                self.flush_entry();
                self.entry = Some(PendingEntry {
                    record_type: pair.value.clone(),
                    ..Default::default()
                });
                continue;
            }

            if let Some(mut entry) = self.entry.take() {
                self.apply_pair(&mut entry, pair);
                self.entry = Some(entry);
            }
        }

        self.flush_entry();
        self.tables
    }

    fn apply_pair(&mut self, entry: &mut PendingEntry, pair: &GroupPair) {
        match pair.code {
            2 => entry.name = Some(pair.value.clone()),
            3 => entry.description = Some(pair.value.clone()),
            6 => entry.line_type = Some(pair.value.clone()),
            7 => entry.font_name = Some(pair.value.clone()),
            40 => entry.height = Some(pair.double_or_zero(self.notifications)),
            49 => entry.elements.push(pair.double_or_zero(self.notifications)),
            62 => entry.color_index = Some(pair.int_or_zero(self.notifications)),
            70 => entry.flags = pair.int_or_zero(self.notifications),
            _ => {}
        }
    }

    fn flush_entry(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        let Some(table_type) = self.table_type.as_deref() else {
            return;
        };
        let Some(name) = entry.name.filter(|n| !n.is_empty()) else {
            self.notifications.notify(
                NotificationType::Warning,
                format!("{} table record without a name dropped", entry.record_type),
            );
            return;
        };

        match table_type {
            "LAYER" => {
                let color_index = match entry.color_index {
                    Some(0) | None => DEFAULT_COLOR_INDEX,
                    Some(index) => index,
                };
                let mut layer = Layer::new(name)
                    .with_color_index(color_index)
                    .with_flags(LayerFlags::from_bits_retain(entry.flags));
                layer.line_type = entry.line_type;
                self.tables.layers.insert(layer);
            }
            "LTYPE" => {
                self.tables.line_types.insert(LineType {
                    name,
                    description: entry.description,
                    pattern_length: entry.height.unwrap_or(0.0),
                    elements: entry.elements,
                });
            }
            "STYLE" => {
                self.tables.styles.insert(TextStyle {
                    name,
                    font_name: entry.font_name.or(entry.description),
                    height: entry.height.unwrap_or(0.0),
                });
            }
            other => log::trace!("ignoring record '{}' of table {}", name, other),
        }
    }
}
