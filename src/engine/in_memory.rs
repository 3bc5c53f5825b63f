//! In-memory convergence engine for testing.
//!
//! Records ensured groups and memberships instead of touching the OS. Useful
//! as a test double and as a reference for implementing real engines.

use crate::context::RequestContext;
use crate::engine::ConvergenceEngine;
use crate::intent::{GroupMembershipResource, GroupResource};
use crate::value_objects::{Gid, Members};
use log::{debug, warn};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur during in-memory engine operations.
#[derive(Debug, Clone, Error)]
pub enum InMemoryEngineError {
    /// The declared gid is already held by a different group. Gids are unique
    /// within the target system.
    #[error("gid {gid} already belongs to group '{holder}', cannot assign to '{name}'")]
    GidConflict {
        gid: u32,
        holder: String,
        name: String,
    },

    /// Membership was declared for a group this engine has never ensured
    #[error("group '{name}' does not exist, cannot set membership")]
    UnknownGroup { name: String },
}

#[derive(Debug, Default)]
struct EngineState {
    /// name -> gid of every ensured group
    groups: HashMap<String, Gid>,
    /// name -> last ensured membership
    memberships: HashMap<String, Members>,
}

/// A convergence engine backed by an in-memory group database.
///
/// ## Examples
///
/// ```rust
/// use account_groups::context::RequestContext;
/// use account_groups::engine::{InMemoryEngine, apply_group};
/// use account_groups::group::GroupParams;
/// use account_groups::value_objects::{Gid, Members};
///
/// # tokio_test::block_on(async {
/// let engine = InMemoryEngine::new();
/// let context = RequestContext::with_generated_id();
/// let params = GroupParams::new(Gid::new(2000), Members::empty());
///
/// apply_group(&engine, "humans", params, &context).await.unwrap();
/// assert_eq!(engine.group_gid("humans").await, Some(Gid::new(2000)));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEngine {
    state: RwLock<EngineState>,
}

impl InMemoryEngine {
    /// Create an engine with an empty group database.
    pub fn new() -> Self {
        Self::default()
    }

    /// The gid of an ensured group, if any.
    pub async fn group_gid(&self, name: &str) -> Option<Gid> {
        self.state.read().await.groups.get(name).copied()
    }

    /// The last ensured membership of a group, if any.
    pub async fn membership(&self, name: &str) -> Option<Members> {
        self.state.read().await.memberships.get(name).cloned()
    }

    /// Number of groups this engine has ensured.
    pub async fn group_count(&self) -> usize {
        self.state.read().await.groups.len()
    }

    /// Remove all recorded state.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.groups.clear();
        state.memberships.clear();
    }
}

impl ConvergenceEngine for InMemoryEngine {
    type Error = InMemoryEngineError;

    async fn ensure_group(
        &self,
        group: &GroupResource,
        context: &RequestContext,
    ) -> Result<(), Self::Error> {
        let mut state = self.state.write().await;
        let name = group.name().as_str();

        if let Some((holder, _)) = state
            .groups
            .iter()
            .find(|(holder, gid)| **gid == group.gid() && holder.as_str() != name)
        {
            warn!(
                "gid conflict for '{}' (request: {})",
                name, context.request_id
            );
            return Err(InMemoryEngineError::GidConflict {
                gid: group.gid().value(),
                holder: holder.clone(),
                name: name.to_string(),
            });
        }

        // Idempotent: re-ensuring the same state is a no-op
        let previous = state.groups.insert(name.to_string(), group.gid());
        if previous.is_none() {
            debug!("created group '{}' (request: {})", name, context.request_id);
        }
        Ok(())
    }

    async fn ensure_membership(
        &self,
        membership: &GroupMembershipResource,
        context: &RequestContext,
    ) -> Result<(), Self::Error> {
        let mut state = self.state.write().await;
        let name = membership.name().as_str();

        if !state.groups.contains_key(name) {
            return Err(InMemoryEngineError::UnknownGroup {
                name: name.to_string(),
            });
        }

        debug!(
            "set membership of '{}' to {} (request: {})",
            name,
            membership.members(),
            context.request_id
        );
        state
            .memberships
            .insert(name.to_string(), membership.members().clone());
        Ok(())
    }
}
