//! Error types for group declaration operations.
//!
//! This module provides error handling for the declaration unit, following
//! Rust's error handling best practices with detailed error information.

/// Main error type for group declaration operations.
///
/// Covers every failure that can occur while turning a title and a raw
/// parameter record into resource intents, plus failures surfaced by a
/// convergence engine while applying those intents.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    /// A required parameter is absent from the parameter record
    #[error("Required parameter '{parameter}' is missing")]
    MissingParameter { parameter: String },

    /// The `gid` parameter is negative, non-integer, or out of range
    #[error("Invalid gid '{value}': must be a non-negative integer")]
    InvalidGid { value: String },

    /// The group title fails validation
    #[error("Invalid group name '{name}': {reason}")]
    InvalidGroupName { name: String, reason: String },

    /// A parameter is present but has the wrong shape
    #[error("Parameter '{parameter}' has invalid type, expected {expected}")]
    InvalidParameterType {
        parameter: String,
        expected: String,
    },

    /// Errors from the injected convergence engine
    #[error("Convergence engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}

// Convenience methods for creating common errors
impl DeclarationError {
    /// Create a missing parameter error
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Create an invalid gid error
    pub fn invalid_gid(value: impl ToString) -> Self {
        Self::InvalidGid {
            value: value.to_string(),
        }
    }

    /// Create an invalid group name error
    pub fn invalid_group_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGroupName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter type error
    pub fn invalid_parameter_type(
        parameter: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameterType {
            parameter: parameter.into(),
            expected: expected.into(),
        }
    }

    /// Wrap a convergence engine error
    pub fn engine<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Engine(Box::new(error))
    }
}

/// Result type alias for declaration operations.
pub type DeclarationResult<T> = Result<T, DeclarationError>;
