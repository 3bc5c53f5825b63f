//! Resource intents emitted by the group declaration unit.
//!
//! An intent is a declarative statement of desired system state. Intents are
//! produced, not persisted: a convergence engine compares them against the
//! actual OS group database and applies whatever changes are needed. This
//! crate never mutates the OS itself.

use crate::value_objects::{Gid, GroupName, Members};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Desired state: an OS group with this name exists and has this gid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResource {
    name: GroupName,
    gid: Gid,
}

impl GroupResource {
    /// Create a group existence intent.
    pub fn new(name: GroupName, gid: Gid) -> Self {
        Self { name, gid }
    }

    /// The group name this intent targets.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// The desired numeric group id.
    pub fn gid(&self) -> Gid {
        self.gid
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group '{}' (gid {})", self.name, self.gid)
    }
}

/// Desired state: the OS group with this name has exactly this membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembershipResource {
    name: GroupName,
    members: Members,
}

impl GroupMembershipResource {
    /// Create a group membership intent.
    pub fn new(name: GroupName, members: Members) -> Self {
        Self { name, members }
    }

    /// The group name this intent targets.
    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// The desired membership, verbatim from the declaration.
    pub fn members(&self) -> &Members {
        &self.members
    }
}

impl fmt::Display for GroupMembershipResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "membership of '{}' = {}", self.name, self.members)
    }
}

/// Tagged union over the intents a group declaration can emit.
///
/// The serialized form carries a `kind` tag so intents can be transported to
/// an out-of-process convergence engine without ambiguity.
///
/// ## Examples
///
/// ```rust
/// use account_groups::intent::{GroupResource, ResourceIntent};
/// use account_groups::value_objects::{Gid, GroupName};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = GroupName::new("humans".to_string())?;
///     let intent = ResourceIntent::Group(GroupResource::new(name, Gid::new(2000)));
///     assert_eq!(intent.name().as_str(), "humans");
///
///     let json = serde_json::to_string(&intent)?;
///     assert!(json.contains("\"kind\":\"group\""));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceIntent {
    /// Ensure the group exists with the declared gid
    Group(GroupResource),
    /// Ensure the group membership equals the declared list
    GroupMembership(GroupMembershipResource),
}

impl ResourceIntent {
    /// The group name this intent targets, common to both variants.
    pub fn name(&self) -> &GroupName {
        match self {
            Self::Group(group) => group.name(),
            Self::GroupMembership(membership) => membership.name(),
        }
    }
}

impl fmt::Display for ResourceIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => write!(f, "{}", group),
            Self::GroupMembership(membership) => write!(f, "{}", membership),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_name(name: &str) -> GroupName {
        GroupName::new(name.to_string()).unwrap()
    }

    #[test]
    fn test_group_resource_accessors() {
        let resource = GroupResource::new(test_name("humans"), Gid::new(2000));
        assert_eq!(resource.name().as_str(), "humans");
        assert_eq!(resource.gid().value(), 2000);
    }

    #[test]
    fn test_membership_resource_accessors() {
        let members = Members::from(vec!["alice", "bob"]);
        let resource = GroupMembershipResource::new(test_name("humans"), members.clone());
        assert_eq!(resource.name().as_str(), "humans");
        assert_eq!(resource.members(), &members);
    }

    #[test]
    fn test_intent_name_common_accessor() {
        let group = ResourceIntent::Group(GroupResource::new(test_name("humans"), Gid::new(2000)));
        let membership = ResourceIntent::GroupMembership(GroupMembershipResource::new(
            test_name("humans"),
            Members::empty(),
        ));

        assert_eq!(group.name(), membership.name());
    }

    #[test]
    fn test_intent_serialization_tagged() {
        let intent = ResourceIntent::GroupMembership(GroupMembershipResource::new(
            test_name("humans"),
            Members::from(vec!["alice"]),
        ));

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["kind"], "group_membership");
        assert_eq!(json["name"], "humans");
        assert_eq!(json["members"][0], "alice");

        let deserialized: ResourceIntent = serde_json::from_value(json).unwrap();
        assert_eq!(intent, deserialized);
    }

    #[test]
    fn test_intent_display() {
        let intent = ResourceIntent::Group(GroupResource::new(test_name("humans"), Gid::new(2000)));
        let rendered = intent.to_string();
        assert!(rendered.contains("humans"));
        assert!(rendered.contains("2000"));
    }
}
