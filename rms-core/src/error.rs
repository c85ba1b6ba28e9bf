//! Typed failures for the store
//!
//! Three kinds cover the whole mutation/query surface:
//! - [`RmsError::Duplicate`]: an add/edit would leave two elements equal
//!   under the natural key
//! - [`RmsError::NotFound`]: a remove/edit/lookup addressed a missing element
//! - [`RmsError::IllegalValue`]: a value-type constructor rejected its input
//!
//! Callers discriminate by variant; the messages are display-only.

use thiserror::Error;

/// Entity kinds, used to tag duplicate/not-found failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Employee,
    Member,
    MenuItem,
    Order,
    Attendance,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Person => "person",
            EntityKind::Employee => "employee",
            EntityKind::Member => "member",
            EntityKind::MenuItem => "menu item",
            EntityKind::Order => "order",
            EntityKind::Attendance => "attendance record",
        };
        write!(f, "{}", name)
    }
}

/// Store error
///
/// Every failing operation leaves the store unchanged; there is no partial
/// application and no rollback log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RmsError {
    /// An equal element already exists in the collection
    #[error("duplicate {0}")]
    Duplicate(EntityKind),
    /// The addressed element is not in the collection
    #[error("{0} not found")]
    NotFound(EntityKind),
    /// A value-type constructor rejected its input
    #[error("{0}")]
    IllegalValue(String),
}

impl RmsError {
    /// Create an illegal-value error with the given constraint message
    pub fn illegal(message: impl Into<String>) -> Self {
        RmsError::IllegalValue(message.into())
    }
}

/// Result alias used across the store
pub type RmsResult<T> = Result<T, RmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RmsError::Duplicate(EntityKind::Employee).to_string(),
            "duplicate employee"
        );
        assert_eq!(
            RmsError::NotFound(EntityKind::MenuItem).to_string(),
            "menu item not found"
        );
        assert_eq!(
            RmsError::illegal("price cannot be negative").to_string(),
            "price cannot be negative"
        );
    }

    #[test]
    fn test_errors_discriminate_by_variant() {
        let err = RmsError::Duplicate(EntityKind::Member);
        assert!(matches!(err, RmsError::Duplicate(EntityKind::Member)));
        assert_ne!(err, RmsError::NotFound(EntityKind::Member));
    }
}
