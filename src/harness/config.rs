//! Fixture configuration.

use std::collections::BTreeSet;

use crate::error::{Result, SetError};

/// Values loaded by `setUp` and the value removed by `testRemove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Values inserted on every `setUp`, in this order
    pub values: Vec<u64>,

    /// Value removed by `testRemove`
    pub remove_target: u64,

    /// Node slots pre-allocated for the fixture set
    pub capacity: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3],
            remove_target: 2,
            capacity: 16,
        }
    }
}

impl FixtureConfig {
    pub fn with_values(mut self, values: Vec<u64>) -> Self {
        self.values = values;
        self
    }

    pub fn with_remove_target(mut self, target: u64) -> Self {
        self.remove_target = target;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check that the fixture can be loaded and the target removed
    ///
    /// # Errors
    ///
    /// - [`SetError::DuplicateValue`] if `values` repeats a value
    /// - [`SetError::NotFound`] if `remove_target` is not in `values`
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for value in &self.values {
            if !seen.insert(*value) {
                return Err(SetError::duplicate(value));
            }
        }
        if !seen.contains(&self.remove_target) {
            return Err(SetError::not_found(&self.remove_target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FixtureConfig::default();

        assert_eq!(config.values, vec![1, 2, 3]);
        assert_eq!(config.remove_target, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_values() {
        let config = FixtureConfig::default().with_values(vec![1, 2, 1]);

        assert_eq!(
            config.validate(),
            Err(SetError::DuplicateValue { value: "1".into() })
        );
    }

    #[test]
    fn test_validate_missing_target() {
        let config = FixtureConfig::default().with_remove_target(9);

        assert_eq!(
            config.validate(),
            Err(SetError::NotFound { value: "9".into() })
        );
    }

    #[test]
    fn test_validate_empty_fixture() {
        let config = FixtureConfig::default().with_values(Vec::new());
        assert!(matches!(config.validate(), Err(SetError::NotFound { .. })));
    }
}
