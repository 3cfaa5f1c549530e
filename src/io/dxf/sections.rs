//! Section splitter

use super::tokenizer::GroupPair;
use crate::notification::{NotificationCollection, NotificationType};

/// The pair streams of the four sections the reader understands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    /// HEADER section pairs
    pub header: Vec<GroupPair>,
    /// TABLES section pairs
    pub tables: Vec<GroupPair>,
    /// BLOCKS section pairs
    pub blocks: Vec<GroupPair>,
    /// ENTITIES section pairs
    pub entities: Vec<GroupPair>,
}

impl Sections {
    fn stream_mut(&mut self, name: &str) -> Option<&mut Vec<GroupPair>> {
        match name {
            "HEADER" => Some(&mut self.header),
            "TABLES" => Some(&mut self.tables),
            "BLOCKS" => Some(&mut self.blocks),
            "ENTITIES" => Some(&mut self.entities),
            _ => None,
        }
    }
}

/// Split a pair sequence into sections.
///
/// `0/SECTION` followed by `2/<name>` opens a section, `0/ENDSEC` closes it
/// and `0/EOF` stops scanning. Pairs outside an open section are dropped, as
/// are the contents of sections other than HEADER, TABLES, BLOCKS and
/// ENTITIES. A section repeated in the file is appended to the first one.
pub fn split_sections(pairs: &[GroupPair], notifications: &mut NotificationCollection) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<String> = None;
    let mut iter = pairs.iter().peekable();

    while let Some(pair) = iter.next() {
        if pair.is_marker("EOF") {
            break;
        }

        if pair.is_marker("SECTION") {
            if let Some(name_pair) = iter.next_if(|next| next.code == 2) {
                let name = name_pair.value.to_uppercase();
                if sections.stream_mut(&name).is_none() {
                    notifications.notify(
                        NotificationType::NotSupported,
                        format!("Section {} skipped", name),
                    );
                }
                current = Some(name);
            }
            continue;
        }

        if pair.is_marker("ENDSEC") {
            current = None;
            continue;
        }

        if let Some(stream) = current.as_deref().and_then(|name| sections.stream_mut(name)) {
            stream.push(pair.clone());
        }
    }

    sections
}
