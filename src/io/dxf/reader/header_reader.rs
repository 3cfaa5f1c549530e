//! HEADER section reader

use crate::document::Header;
use crate::io::dxf::GroupPair;
use crate::notification::NotificationCollection;
use crate::types::Coordinate;

/// Reads the header variables the library understands.
///
/// Each `9/$NAME` pair selects the variable that the following pairs
/// describe; unrecognized variables are skipped.
pub(crate) struct HeaderReader<'a> {
    notifications: &'a mut NotificationCollection,
}

impl<'a> HeaderReader<'a> {
    pub(crate) fn new(notifications: &'a mut NotificationCollection) -> Self {
        Self { notifications }
    }

    pub(crate) fn read(&mut self, pairs: &[GroupPair]) -> Header {
        let mut header = Header::default();
        let mut variable: Option<&str> = None;

        for pair in pairs {
            if pair.code == 9 {
                variable = Some(pair.value.as_str());
                continue;
            }

            match (variable, pair.code) {
                (Some("$ACADVER"), 1) => header.version = Some(pair.value.clone()),
                (Some("$DWGCODEPAGE"), 3) => header.code_page = Some(pair.value.clone()),
                (Some("$INSUNITS"), 70) => {
                    header.insertion_units = Some(pair.int_or_zero(self.notifications))
                }
                (Some("$EXTMIN"), code) => {
                    self.read_extent(&mut header.extents_min, code, pair);
                }
                (Some("$EXTMAX"), code) => {
                    self.read_extent(&mut header.extents_max, code, pair);
                }
                _ => {}
            }
        }

        header
    }

    /// Code 10 starts a new 3D point; 20 and 30 only fill an existing one.
    fn read_extent(&mut self, target: &mut Option<Coordinate>, code: i32, pair: &GroupPair) {
        match code {
            10 => {
                let x = pair.double_or_zero(self.notifications);
                *target = Some(Coordinate::new_3d(x, 0.0, 0.0));
            }
            20 => {
                if let Some(point) = target.as_mut() {
                    point.y = pair.double_or_zero(self.notifications);
                }
            }
            30 => {
                if let Some(point) = target.as_mut() {
                    point.z = Some(pair.double_or_zero(self.notifications));
                }
            }
            _ => {}
        }
    }
}
