//! Request context for declaration application.
//!
//! Provides request tracking for logging and auditing when intents are handed
//! to a convergence engine.

use uuid::Uuid;

/// Correlation context for a single apply operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: String) -> Self {
        Self { request_id }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_request_id() {
        let context = RequestContext::new("req-1".to_string());
        assert_eq!(context.request_id, "req-1");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RequestContext::with_generated_id();
        let b = RequestContext::with_generated_id();
        assert_ne!(a.request_id, b.request_id);
    }
}
