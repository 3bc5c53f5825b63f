//! Convergence engine seam.
//!
//! This crate only produces intents; reconciling them against the actual OS
//! group database is the job of a convergence engine supplied by the caller.
//! The engine is modeled as an injected trait so the declaration logic stays
//! pure and independently testable. The design is async-first: real engines
//! shell out to `groupadd`/`gpasswd` or talk to a directory service.

mod in_memory;

pub use in_memory::{InMemoryEngine, InMemoryEngineError};

use crate::context::RequestContext;
use crate::error::{DeclarationError, DeclarationResult};
use crate::group::{GroupParams, declare_group};
use crate::intent::{GroupMembershipResource, GroupResource};
use log::{debug, info};
use std::future::Future;

/// Trait for reconciling group intents against an OS group database.
///
/// Implementations compare the declared state with the actual state and apply
/// the minimal changes needed. Both operations must be idempotent: ensuring a
/// state that already holds is a no-op, not an error.
pub trait ConvergenceEngine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ensure an OS group exists with the declared name and gid.
    fn ensure_group(
        &self,
        group: &GroupResource,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Ensure the OS group's membership equals the declared list.
    fn ensure_membership(
        &self,
        membership: &GroupMembershipResource,
        context: &RequestContext,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Declare a group and hand both intents to an engine, group existence first.
///
/// Engine failures surface as [`DeclarationError::Engine`]. Membership is not
/// applied when the group intent fails.
pub async fn apply_group<E: ConvergenceEngine>(
    engine: &E,
    title: impl Into<String>,
    params: GroupParams,
    context: &RequestContext,
) -> DeclarationResult<(GroupResource, GroupMembershipResource)> {
    let (group, membership) = declare_group(title, params)?;

    debug!(
        "Applying {} (request: {})",
        group, context.request_id
    );
    engine
        .ensure_group(&group, context)
        .await
        .map_err(DeclarationError::engine)?;

    debug!(
        "Applying {} (request: {})",
        membership, context.request_id
    );
    engine
        .ensure_membership(&membership, context)
        .await
        .map_err(DeclarationError::engine)?;

    info!(
        "Converged group '{}' (request: {})",
        group.name(),
        context.request_id
    );
    Ok((group, membership))
}
