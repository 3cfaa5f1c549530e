//! BLOCKS section reader

use super::entity_reader::EntityReader;
use crate::entities::Block;
use crate::io::dxf::GroupPair;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::Table;
use crate::types::Coordinate;

/// Reads block definitions.
///
/// `0/BLOCK` opens a definition whose header carries the name (2) and base
/// point (10/20). The first code 0 marker after it starts the entity body,
/// which runs up to `0/ENDBLK` and is read with the entity reader.
pub(crate) struct BlockReader<'a> {
    notifications: &'a mut NotificationCollection,
}

impl<'a> BlockReader<'a> {
    pub(crate) fn new(notifications: &'a mut NotificationCollection) -> Self {
        Self { notifications }
    }

    pub(crate) fn read(&mut self, pairs: &[GroupPair]) -> Table<Block> {
        let mut blocks = Table::new();
        let mut name: Option<String> = None;
        let mut base = Coordinate::default();
        let mut body_start: Option<usize> = None;
        let mut open = false;

        for (index, pair) in pairs.iter().enumerate() {
            if pair.is_marker("BLOCK") {
                name = None;
                base = Coordinate::default();
                body_start = None;
                open = true;
                continue;
            }

            if pair.is_marker("ENDBLK") {
                if open {
                    let body = body_start.map_or(&pairs[index..index], |start| &pairs[start..index]);
                    self.finish_block(name.take(), base, body, &mut blocks);
                }
                body_start = None;
                open = false;
                continue;
            }

            if !open || body_start.is_some() {
                continue;
            }

            match pair.code {
                0 => body_start = Some(index),
                2 => name = Some(pair.value.clone()),
                10 => base.x = pair.double_or_zero(self.notifications),
                20 => base.y = pair.double_or_zero(self.notifications),
                _ => {}
            }
        }

        blocks
    }

    fn finish_block(
        &mut self,
        name: Option<String>,
        base: Coordinate,
        body: &[GroupPair],
        blocks: &mut Table<Block>,
    ) {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.notifications
                .notify(NotificationType::Warning, "Block without a name skipped");
            return;
        };

        let mut block = Block::new(name, base);
        block.entities = EntityReader::new(self.notifications).read(body);
        log::trace!(
            "block {} read with {} entities",
            block.name,
            block.entities.len()
        );
        blocks.insert(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::tokenize;

    fn read(text: &str) -> (Table<Block>, NotificationCollection) {
        let mut notes = NotificationCollection::new();
        let blocks = BlockReader::new(&mut notes).read(&tokenize(text));
        (blocks, notes)
    }

    #[test]
    fn test_read_block_with_entities() {
        let (blocks, notes) = read(
            "0\nBLOCK\n8\n0\n2\nDOOR\n70\n0\n10\n1.0\n20\n2.0\n30\n0.0\n3\nDOOR\n\
             0\nLINE\n10\n0\n20\n0\n11\n1\n21\n0\n\
             0\nCIRCLE\n10\n0\n20\n0\n40\n1\n\
             0\nENDBLK\n8\n0\n",
        );
        assert!(notes.is_empty());
        let door = blocks.get("door").expect("block present");
        assert_eq!(door.name, "DOOR");
        assert_eq!(door.base_point, Coordinate::new(1.0, 2.0));
        assert_eq!(door.entities.len(), 2);
    }

    #[test]
    fn test_empty_block_and_multiple_blocks() {
        let (blocks, _) = read(
            "0\nBLOCK\n2\n*Model_Space\n0\nENDBLK\n\
             0\nBLOCK\n2\nA\n0\nPOINT\n10\n1\n20\n1\n0\nENDBLK\n",
        );
        assert_eq!(blocks.len(), 2);
        assert!(blocks.get("*MODEL_SPACE").is_some_and(|b| b.entities.is_empty()));
        assert_eq!(blocks.get("A").map(|b| b.entities.len()), Some(1));
    }

    #[test]
    fn test_nameless_block_skipped() {
        let (blocks, notes) = read("0\nBLOCK\n10\n0\n20\n0\n0\nPOINT\n10\n1\n0\nENDBLK\n");
        assert!(blocks.is_empty());
        assert!(notes.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_later_definition_replaces_earlier() {
        let (blocks, _) = read(
            "0\nBLOCK\n2\nA\n0\nPOINT\n10\n1\n0\nENDBLK\n\
             0\nBLOCK\n2\nA\n0\nPOINT\n10\n1\n0\nPOINT\n10\n2\n0\nENDBLK\n",
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks.get("A").map(|b| b.entities.len()), Some(2));
    }
}
