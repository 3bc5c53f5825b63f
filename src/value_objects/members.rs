//! Members value object for group membership lists.
//!
//! Membership is carried VERBATIM from the declaration to the emitted intent:
//! no deduplication, no sorting, no trimming. Whether order or duplicates are
//! meaningful is a property of the consuming convergence engine, not of this
//! unit, so the list must survive the mapping untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of usernames belonging to a group.
///
/// The list may be empty (a group with no members is a valid declaration) and
/// is never normalized by this crate.
///
/// ## Examples
///
/// ```rust
/// use account_groups::value_objects::Members;
///
/// let members = Members::from(vec!["alice".to_string(), "bob".to_string()]);
/// assert_eq!(members.len(), 2);
/// assert!(!members.is_empty());
///
/// let nobody = Members::empty();
/// assert!(nobody.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Members(Vec<String>);

impl Members {
    /// Create a Members list from a vector of usernames, preserving order and
    /// duplicates.
    pub fn new(members: Vec<String>) -> Self {
        Self(members)
    }

    /// Create an empty membership list.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the usernames in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// View the usernames as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the list and return the underlying vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Members {
    fn from(members: Vec<String>) -> Self {
        Self(members)
    }
}

impl From<Vec<&str>> for Members {
    fn from(members: Vec<&str>) -> Self {
        Self(members.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Members {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
