//! Group code tokenizer
//!
//! A DXF text file is a flat sequence of line pairs: an integer group code
//! followed by its value. The tokenizer knows nothing about structure; it only
//! produces the ordered pair sequence.

use crate::notification::{NotificationCollection, NotificationType};

/// A DXF group code / value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPair {
    /// The group code
    pub code: i32,
    /// The trimmed value line
    pub value: String,
}

impl GroupPair {
    /// Create a new pair
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }

    /// Check for a code 0 record marker with the given name
    pub fn is_marker(&self, name: &str) -> bool {
        self.code == 0 && self.value == name
    }

    /// Get value as double
    pub fn as_double(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }

    /// Get value as integer.
    ///
    /// Integer codes written with a fractional part are truncated.
    pub fn as_int(&self) -> Option<i64> {
        let value = self.value.trim();
        value
            .parse::<i64>()
            .ok()
            .or_else(|| value.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
    }

    /// Get value as double, coercing malformed values to 0 with a notification
    pub(crate) fn double_or_zero(&self, notifications: &mut NotificationCollection) -> f64 {
        self.as_double().unwrap_or_else(|| {
            self.report_malformed(notifications);
            0.0
        })
    }

    /// Get value as i32, coercing malformed values to 0 with a notification
    pub(crate) fn int_or_zero(&self, notifications: &mut NotificationCollection) -> i32 {
        match self.as_int().and_then(|v| i32::try_from(v).ok()) {
            Some(v) => v,
            None => {
                self.report_malformed(notifications);
                0
            }
        }
    }

    fn report_malformed(&self, notifications: &mut NotificationCollection) {
        notifications.notify(
            NotificationType::Error,
            format!(
                "Malformed numeric value '{}' for group code {}, using 0",
                self.value, self.code
            ),
        );
    }
}

/// Split DXF text into group pairs.
///
/// LF and CRLF line endings are handled alike; both lines of a pair are
/// trimmed. An empty code line is skipped on its own, a code line that is not
/// an integer drops the whole pair, and a trailing code line without a value
/// is ignored.
pub fn tokenize(text: &str) -> Vec<GroupPair> {
    let mut lines = text.split('\n').map(|line| line.trim());
    let mut pairs = Vec::new();

    while let Some(code_line) = lines.next() {
        if code_line.is_empty() {
            continue;
        }
        let Some(value_line) = lines.next() else {
            break;
        };
        match code_line.parse::<i32>() {
            Ok(code) => pairs.push(GroupPair::new(code, value_line)),
            Err(_) => log::trace!("dropping pair with non-integer code line '{}'", code_line),
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_pairs() {
        let pairs = tokenize("0\nSECTION\n2\nHEADER\n");
        assert_eq!(
            pairs,
            vec![GroupPair::new(0, "SECTION"), GroupPair::new(2, "HEADER")]
        );
    }

    #[test]
    fn test_tokenize_crlf_and_padding() {
        let lf = tokenize("  0\nLINE\n 10\n1.5\n");
        let crlf = tokenize("  0\r\nLINE\r\n 10\r\n1.5\r\n");
        assert_eq!(lf, crlf);
        assert_eq!(lf[1].as_double(), Some(1.5));
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_blank_code_line_skipped_alone() {
        let pairs = tokenize("\n0\nLINE\n8\nWalls\n");
        assert_eq!(pairs, vec![GroupPair::new(0, "LINE"), GroupPair::new(8, "Walls")]);
    }

    #[test]
    fn test_malformed_code_drops_pair() {
        let pairs = tokenize("0\nLINE\nxx\nignored\n8\nA\n");
        assert_eq!(pairs, vec![GroupPair::new(0, "LINE"), GroupPair::new(8, "A")]);
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(GroupPair::new(70, "  1").as_int(), Some(1));
        assert_eq!(GroupPair::new(70, "2.0").as_int(), Some(2));
        assert_eq!(GroupPair::new(40, "abc").as_double(), None);

        let mut notes = NotificationCollection::new();
        assert_eq!(GroupPair::new(40, "abc").double_or_zero(&mut notes), 0.0);
        assert_eq!(GroupPair::new(62, "").int_or_zero(&mut notes), 0);
        assert_eq!(notes.of_type(NotificationType::Error).len(), 2);
    }
}
