//! Persistence adapter for the restaurant management store
//!
//! Each entity kind gets an adapted form that is built from the entity's
//! read-only projection, serialized by the XML layer, and converted back
//! through the validating constructors. Order customers are rehydrated
//! against the member list on the way in.

pub mod adapted;
pub mod error;
pub mod xml;

// Re-exports
pub use adapted::{
    AdaptedAttendance, AdaptedDishLine, AdaptedEmployee, AdaptedMember, AdaptedMenuItem,
    AdaptedOrder, AdaptedPerson, AdaptedRms, AdaptedSession,
};
pub use error::{StorageError, StorageResult};
pub use xml::{load_rms, save_rms};
