//! Value objects for group declaration domain primitives.
//!
//! This module contains immutable value objects that encapsulate validation
//! logic for the core concepts of an OS group declaration. Each value object
//! enforces invariants at construction time, making invalid states
//! unrepresentable.
//!
//! ## Design Principles
//!
//! - **Immutable**: Once created, value objects cannot be modified
//! - **Self-validating**: Validation happens at construction time via explicit constructors
//! - **Type-safe**: Invalid states are unrepresentable at compile time
//! - **Verbatim membership**: [`Members`] never reorders or deduplicates its entries

mod gid;
mod group_name;
mod members;

pub use gid::Gid;
pub use group_name::GroupName;
pub use members::Members;
