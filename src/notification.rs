//! Parse and conversion diagnostics.
//!
//! Input problems are never fatal: unknown entity types, nameless table
//! entries, malformed numbers and unresolved block references are recorded
//! here as `Notification` items and the reader carries on. Every notification
//! is also forwarded to the `log` facade so hosts that only install a logger
//! still see them.
//!
//! After a read the caller can inspect [`DxfDocument::notifications`] and,
//! after a conversion, [`FeatureConverter::notifications`].
//!
//! [`DxfDocument::notifications`]: crate::document::DxfDocument::notifications
//! [`FeatureConverter::notifications`]: crate::features::FeatureConverter::notifications

use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Input construct that this reader skips (unknown entity, section...).
    NotSupported,
    /// Non-fatal warning (nameless entry, missing block, depth limit).
    Warning,
    /// Recovered error (malformed numeric value coerced to zero).
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during reading or conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Collects notifications during a read or conversion.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification and forward it to the logger.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        let notification = Notification::new(notification_type, message);
        match notification.notification_type {
            NotificationType::NotSupported => log::debug!("{}", notification.message),
            NotificationType::Warning | NotificationType::Error => {
                log::warn!("{}", notification.message)
            }
        }
        self.items.push(notification);
    }

    /// Move every notification of `other` into this collection.
    pub fn append(&mut self, other: &mut NotificationCollection) {
        self.items.append(&mut other.items);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::Warning, "block 'DOOR' not found");
        c.notify(NotificationType::Error, "invalid number 'abc' for code 40");
        c.notify(NotificationType::NotSupported, "entity type 'VIEWPORT'");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 1);
        assert!(c.has_type(NotificationType::Error));
    }

    #[test]
    fn test_append_moves_items() {
        let mut a = NotificationCollection::new();
        let mut b = NotificationCollection::new();
        b.notify(NotificationType::Warning, "w");
        a.append(&mut b);
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotSupported, "section 'OBJECTS'");
        assert_eq!(format!("{}", n), "[NotSupported] section 'OBJECTS'");
    }
}
