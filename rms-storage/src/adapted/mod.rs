//! Storage-friendly adapted forms
//!
//! One adapted struct per entity kind. Every required field is optional at
//! the serde level, so a missing element in the stored document surfaces as
//! `None` and is reported as an illegal value by `to_model` instead of a
//! parse failure. Nested value types go back through their validating
//! constructors on the way in.

pub mod attendance;
pub mod employee;
pub mod member;
pub mod menu;
pub mod order;
pub mod person;
pub mod rms;

// Re-exports
pub use attendance::{AdaptedAttendance, AdaptedSession};
pub use employee::AdaptedEmployee;
pub use member::AdaptedMember;
pub use menu::AdaptedMenuItem;
pub use order::{AdaptedDishLine, AdaptedOrder};
pub use person::AdaptedPerson;
pub use rms::AdaptedRms;

use rms_core::{RmsError, RmsResult};

/// Extract a required field, failing with `IllegalValue` when absent
pub(crate) fn required<T: Clone>(field: &Option<T>, name: &str) -> RmsResult<T> {
    field
        .clone()
        .ok_or_else(|| RmsError::illegal(format!("missing required field: {}", name)))
}
