//! Gid value object for numeric group identifiers.

use crate::error::{DeclarationError, DeclarationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated numeric group id.
///
/// A gid is always non-negative; the wrapped `u32` makes that unrepresentable
/// otherwise. Untrusted numeric input arrives as a signed value and goes
/// through [`Gid::from_signed`], which is where the range check lives.
///
/// ## Examples
///
/// ```rust
/// use account_groups::value_objects::Gid;
///
/// let gid = Gid::new(2000);
/// assert_eq!(gid.value(), 2000);
///
/// // Negative input is rejected at the boundary
/// assert!(Gid::from_signed(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gid(u32);

impl Gid {
    /// Create a Gid from an already non-negative value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a Gid from untrusted signed input.
    ///
    /// # Errors
    ///
    /// Returns [`DeclarationError::InvalidGid`] when the value is negative or
    /// exceeds the `u32` range of the OS group database.
    pub fn from_signed(value: i64) -> DeclarationResult<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DeclarationError::invalid_gid(value))
    }

    /// Get the numeric value of the Gid.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Gid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Gid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
