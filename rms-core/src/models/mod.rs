//! Data models
//!
//! Each entity module pairs the mutable struct with its read-only getter
//! trait; natural-key equality lives on the `UniqueEntity` impl.

pub mod attendance;
pub mod employee;
pub mod member;
pub mod menu;
pub mod order;
pub mod person;

// Re-exports
pub use attendance::*;
pub use employee::*;
pub use member::*;
pub use menu::*;
pub use order::*;
pub use person::*;
