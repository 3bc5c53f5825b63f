//! The group declaration unit.
//!
//! Maps a symbolic title plus a `{members, gid}` parameter record onto exactly
//! two resource intents: one for group existence, one for group membership.
//! The mapping is a pure, single-step, stateless transformation with no I/O
//! and no suspension points; it either yields both intents or fails before
//! producing any.

use crate::error::{DeclarationError, DeclarationResult};
use crate::intent::{GroupMembershipResource, GroupResource, ResourceIntent};
use crate::value_objects::{Gid, GroupName, Members};
use serde_json::Value;

/// The raw parameter record of a group declaration.
///
/// This mirrors what a declaration-loading mechanism hands over: a `gid` and a
/// `members` list keyed by name, with no title attached. Parse untrusted
/// payloads with [`GroupParams::from_value`]; construct directly when the
/// values are already typed.
///
/// ## Examples
///
/// ```rust
/// use account_groups::group::GroupParams;
/// use serde_json::json;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let params = GroupParams::from_value(&json!({
///         "gid": 2000,
///         "members": ["alice", "bob"],
///     }))?;
///     assert_eq!(params.gid().value(), 2000);
///
///     // Missing gid is rejected
///     assert!(GroupParams::from_value(&json!({ "members": [] })).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParams {
    gid: Gid,
    members: Members,
}

impl GroupParams {
    /// Create a parameter record from already validated values.
    pub fn new(gid: Gid, members: Members) -> Self {
        Self { gid, members }
    }

    /// Parse a parameter record from an untrusted JSON object.
    ///
    /// # Errors
    ///
    /// - [`DeclarationError::MissingParameter`] when `gid` or `members` is absent
    /// - [`DeclarationError::InvalidGid`] when `gid` is negative or not an integer
    /// - [`DeclarationError::InvalidParameterType`] when the record is not an
    ///   object or `members` is not an array of strings
    pub fn from_value(value: &Value) -> DeclarationResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| DeclarationError::invalid_parameter_type("params", "object"))?;

        let gid_value = object
            .get("gid")
            .ok_or_else(|| DeclarationError::missing_parameter("gid"))?;
        let gid = match gid_value.as_i64() {
            Some(signed) => Gid::from_signed(signed)?,
            None => return Err(DeclarationError::invalid_gid(gid_value)),
        };

        let members_value = object
            .get("members")
            .ok_or_else(|| DeclarationError::missing_parameter("members"))?;
        let entries = members_value.as_array().ok_or_else(|| {
            DeclarationError::invalid_parameter_type("members", "array of strings")
        })?;
        let members = entries
            .iter()
            .map(|entry| {
                entry.as_str().map(str::to_string).ok_or_else(|| {
                    DeclarationError::invalid_parameter_type("members", "array of strings")
                })
            })
            .collect::<DeclarationResult<Vec<String>>>()
            .map(Members::new)?;

        Ok(Self { gid, members })
    }

    /// The declared numeric group id.
    pub fn gid(&self) -> Gid {
        self.gid
    }

    /// The declared membership list, verbatim.
    pub fn members(&self) -> &Members {
        &self.members
    }
}

/// A fully validated group declaration.
///
/// Constructed transiently per invocation, mapped to two intents, discarded.
/// No persistence, no mutation after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    name: GroupName,
    gid: Gid,
    members: Members,
}

impl GroupSpec {
    /// Create a group declaration from a title and typed parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::InvalidGroupName`] when the title fails
    /// validation.
    pub fn new(title: impl Into<String>, params: GroupParams) -> DeclarationResult<Self> {
        let name = GroupName::new(title.into())?;
        Ok(Self {
            name,
            gid: params.gid,
            members: params.members,
        })
    }

    /// The group name shared by both emitted intents.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Map this declaration onto its two resource intents.
    ///
    /// Both intents carry the same name; `members` goes through verbatim.
    pub fn into_intents(self) -> (GroupResource, GroupMembershipResource) {
        let group = GroupResource::new(self.name.clone(), self.gid);
        let membership = GroupMembershipResource::new(self.name, self.members);
        (group, membership)
    }
}

/// Declare an OS group: map `title` and `params` onto exactly one group
/// existence intent and one group membership intent.
///
/// Guarantees:
///
/// - both intents carry `name == title` (identity linkage)
/// - `members` is passed through unmodified: no deduplication, no sorting
/// - either both intents are produced or the error is returned before any
///   intent exists
///
/// ## Examples
///
/// ```rust
/// use account_groups::group::{GroupParams, declare_group};
/// use account_groups::value_objects::{Gid, Members};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let params = GroupParams::new(Gid::new(2000), Members::empty());
///     let (group, membership) = declare_group("humans", params)?;
///
///     assert_eq!(group.name().as_str(), "humans");
///     assert_eq!(group.gid().value(), 2000);
///     assert_eq!(membership.name(), group.name());
///     assert!(membership.members().is_empty());
///     Ok(())
/// }
/// ```
pub fn declare_group(
    title: impl Into<String>,
    params: GroupParams,
) -> DeclarationResult<(GroupResource, GroupMembershipResource)> {
    Ok(GroupSpec::new(title, params)?.into_intents())
}

/// As [`declare_group`], but returns the intents as a tagged list ready for
/// transport, group existence first.
pub fn declare_group_intents(
    title: impl Into<String>,
    params: GroupParams,
) -> DeclarationResult<Vec<ResourceIntent>> {
    let (group, membership) = declare_group(title, params)?;
    Ok(vec![
        ResourceIntent::Group(group),
        ResourceIntent::GroupMembership(membership),
    ])
}
