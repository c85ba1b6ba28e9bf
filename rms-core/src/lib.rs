//! In-memory restaurant management store
//!
//! The authoritative snapshot of a restaurant's business collections:
//! persons, employees, members, menu items, orders and attendance records,
//! plus the transient draft order used to compose a new order before
//! committing it. [`Rms`] owns the collections, enforces natural-key
//! uniqueness, and hands out defensively copied snapshots.

pub mod collection;
pub mod error;
pub mod models;
pub mod rms;
pub mod util;

// Re-exports
pub use collection::{KeyIndexed, UniqueCollection, UniqueEntity};
pub use error::{EntityKind, RmsError, RmsResult};
pub use rms::Rms;
pub use util::{Timestamp, now_millis};
