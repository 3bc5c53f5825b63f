//! GroupName value object for OS group identifiers.
//!
//! This module provides a type-safe wrapper around group names with built-in
//! validation. The group name is the identity linkage between the two intents
//! produced for a declaration, so it must be valid before any intent exists.

use crate::error::{DeclarationError, DeclarationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length accepted for an OS group name.
///
/// Matches the conventional `groupadd` limit on Linux systems.
const MAX_GROUP_NAME_LENGTH: usize = 32;

/// A validated OS group name.
///
/// GroupName represents the symbolic title of a group declaration. It enforces
/// validation rules at construction time, ensuring that only names an OS group
/// database could hold can exist in the system.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must not exceed 32 characters
/// - Must not contain whitespace or control characters
///
/// ## Examples
///
/// ```rust
/// use account_groups::value_objects::GroupName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = GroupName::new("humans".to_string())?;
///     assert_eq!(name.as_str(), "humans");
///
///     // Invalid group name - returns DeclarationError
///     let invalid = GroupName::new("".to_string());
///     assert!(invalid.is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Create a new GroupName with validation.
    ///
    /// This is the primary constructor that enforces all validation rules.
    /// Use this method when creating GroupName instances from untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::InvalidGroupName`] when the value violates
    /// a validation rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use account_groups::value_objects::GroupName;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let name = GroupName::new("wheel".to_string())?;
    ///     let empty = GroupName::new("".to_string()); // Error
    ///     assert!(empty.is_err());
    ///     Ok(())
    /// }
    /// ```
    pub fn new(value: String) -> DeclarationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Get the string representation of the GroupName.
    ///
    /// Safe because the value is guaranteed to be valid by construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the GroupName and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> DeclarationResult<()> {
        if value.is_empty() {
            return Err(DeclarationError::invalid_group_name(
                value,
                "group name cannot be empty",
            ));
        }

        if value.len() > MAX_GROUP_NAME_LENGTH {
            return Err(DeclarationError::invalid_group_name(
                value,
                format!("group name cannot exceed {} characters", MAX_GROUP_NAME_LENGTH),
            ));
        }

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DeclarationError::invalid_group_name(
                value,
                "group name cannot contain whitespace or control characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_name_valid() {
        let name = GroupName::new("humans".to_string()).unwrap();
        assert_eq!(name.as_str(), "humans");
        assert_eq!(name.to_string(), "humans");
    }

    #[test]
    fn test_group_name_empty() {
        let result = GroupName::new("".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_group_name_too_long() {
        let long_name = "g".repeat(MAX_GROUP_NAME_LENGTH + 1);
        let result = GroupName::new(long_name);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed 32"));
    }

    #[test]
    fn test_group_name_boundary_length() {
        let name = GroupName::new("g".repeat(MAX_GROUP_NAME_LENGTH)).unwrap();
        assert_eq!(name.as_str().len(), MAX_GROUP_NAME_LENGTH);
    }

    #[test]
    fn test_group_name_whitespace_rejected() {
        assert!(GroupName::new("two words".to_string()).is_err());
        assert!(GroupName::new("tab\there".to_string()).is_err());
        assert!(GroupName::new("nul\u{0}char".to_string()).is_err());
        assert!(GroupName::new("nl\nhere".to_string()).is_err());
    }

    #[test]
    fn test_group_name_serde_transparent() {
        let name = GroupName::new("humans".to_string()).unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"humans\"");

        let deserialized: GroupName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, deserialized);
    }
}
