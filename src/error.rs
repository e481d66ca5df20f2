//! Error type shared by the set and the fixture harness.
//!
//! Values are captured with their `Debug` rendering so that `SetError`
//! stays non-generic and can cross the harness boundary unchanged.

use std::fmt::Debug;

use thiserror::Error;

/// Errors reported by [`OrderedLinkedSet`](crate::list::OrderedLinkedSet)
/// operations and by the fixture harness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// The value is already a live member of the set
    #[error("duplicate value: {value}")]
    DuplicateValue { value: String },

    /// The value is not a live member of the set
    #[error("value not found: {value}")]
    NotFound { value: String },

    /// An internal consistency check failed
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl SetError {
    pub(crate) fn duplicate<T: Debug>(value: &T) -> Self {
        SetError::DuplicateValue {
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn not_found<T: Debug>(value: &T) -> Self {
        SetError::NotFound {
            value: format!("{value:?}"),
        }
    }

    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        SetError::InvariantViolation(msg.into())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SetError::duplicate(&7u64).to_string(), "duplicate value: 7");
        assert_eq!(SetError::not_found(&"x").to_string(), "value not found: \"x\"");
        assert_eq!(
            SetError::invariant("count mismatch").to_string(),
            "invariant violation: count mismatch"
        );
    }
}
