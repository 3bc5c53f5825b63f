//! Type-safe OS group declarations for Rust.
//!
//! Turns a symbolic title plus a `{members, gid}` parameter record into
//! exactly two declarative resource intents: one asserting the group exists
//! with the declared gid, one asserting its membership equals the declared
//! list. The intents are consumed by a convergence engine (injected through
//! the [`ConvergenceEngine`] trait) that reconciles them against the actual
//! OS group database; this crate itself never touches the OS.
//!
//! # Core Components
//!
//! - [`declare_group`] - The pure declaration mapping
//! - [`ResourceIntent`] - Tagged intents ready for transport
//! - [`ConvergenceEngine`] - Trait for implementing reconciliation backends
//!
//! # Quick Start
//!
//! ```rust
//! use account_groups::{GroupParams, declare_group};
//! use account_groups::value_objects::{Gid, Members};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let params = GroupParams::new(Gid::new(2000), Members::empty());
//!     let (group, membership) = declare_group("humans", params)?;
//!
//!     assert_eq!(group.name().as_str(), "humans");
//!     assert_eq!(membership.name(), group.name());
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod group;
pub mod intent;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use context::RequestContext;
pub use engine::{ConvergenceEngine, InMemoryEngine, apply_group};
pub use error::{DeclarationError, DeclarationResult};
pub use group::{GroupParams, GroupSpec, declare_group, declare_group_intents};
pub use intent::{GroupMembershipResource, GroupResource, ResourceIntent};
pub use value_objects::{Gid, GroupName, Members};
