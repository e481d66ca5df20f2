//! `LinkedListTest` fixture: `setUp` plus the test entry points.
//!
//! Every test entry point returns `Ok(())` when all of its assertions hold
//! and the first failed assertion as [`SetError::InvariantViolation`]
//! otherwise. Errors from the set itself are propagated unchanged.

use tracing::debug;

use crate::error::{Result, SetError};
use crate::harness::FixtureConfig;
use crate::list::OrderedLinkedSet;

/// Name the harness reports for this fixture
pub const CONTRACT_NAME: &str = "LinkedListTest";

/// Fail with an invariant violation unless `cond` holds.
fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(SetError::invariant(msg()))
    }
}

/// Fixture owning one set of `u64` values.
#[derive(Debug, Clone)]
pub struct LinkedListTest {
    config: FixtureConfig,
    set: OrderedLinkedSet<u64>,
}

impl LinkedListTest {
    /// Create the fixture; the set stays empty until [`set_up`](Self::set_up)
    ///
    /// # Errors
    ///
    /// Propagates [`FixtureConfig::validate`] failures.
    pub fn new(config: FixtureConfig) -> Result<Self> {
        config.validate()?;
        let set = OrderedLinkedSet::with_capacity(config.capacity);
        Ok(Self { config, set })
    }

    #[inline]
    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// The set under test
    #[inline]
    pub fn set(&self) -> &OrderedLinkedSet<u64> {
        &self.set
    }

    #[inline]
    pub fn set_mut(&mut self) -> &mut OrderedLinkedSet<u64> {
        &mut self.set
    }

    // ========================================================================
    // setUp
    // ========================================================================

    /// Discard the current set and load the fixture values
    ///
    /// Running it twice in a row yields the same state root.
    pub fn set_up(&mut self) -> Result<()> {
        let mut set = OrderedLinkedSet::with_capacity(self.config.capacity);
        set.try_extend(self.config.values.iter().copied())?;
        set.check_invariants()?;

        debug!(
            target: "harness",
            contract = CONTRACT_NAME,
            len = set.len(),
            root = %set.state_root_hex(),
            "setUp complete"
        );
        self.set = set;
        Ok(())
    }

    // ========================================================================
    // Test entry points
    // ========================================================================

    /// Remove the configured target and verify the chain around it
    ///
    /// Asserts that the count drops by exactly one, that the target is gone,
    /// that every other fixture value is still reachable, that the chain is
    /// the previous chain minus the target, and that every structural
    /// invariant still holds.
    pub fn test_remove(&mut self) -> Result<()> {
        let target = self.config.remove_target;
        let before_len = self.set.len();
        let before_chain = self.set.to_vec();

        let removed = self.set.remove(&target)?;
        ensure(removed == target, || {
            format!("remove({target}) returned {removed}")
        })?;

        let len = self.set.len();
        ensure(len + 1 == before_len, || {
            format!("count is {len}, expected {}", before_len.saturating_sub(1))
        })?;
        ensure(!self.set.contains(&target), || {
            format!("{target} still reachable after remove")
        })?;

        for value in self.config.values.iter().filter(|v| **v != target) {
            ensure(self.set.contains(value), || {
                format!("{value} lost by remove({target})")
            })?;
        }

        let expected: Vec<u64> = before_chain.into_iter().filter(|v| *v != target).collect();
        let chain = self.set.to_vec();
        ensure(chain == expected, || {
            format!("chain is {chain:?}, expected {expected:?}")
        })?;

        self.set.check_invariants()
    }

    /// Insert an existing fixture value and expect `DuplicateValue`
    pub fn test_insert_duplicate(&mut self) -> Result<()> {
        let target = self.config.remove_target;
        let root = self.set.state_root();

        match self.set.insert(target) {
            Err(SetError::DuplicateValue { .. }) => {}
            Err(err) => return Err(err),
            Ok(_) => {
                return Err(SetError::invariant(format!(
                    "duplicate insert of {target} accepted"
                )))
            }
        }

        ensure(self.set.state_root() == root, || {
            "rejected insert changed the set".to_string()
        })?;
        self.set.check_invariants()
    }

    /// Remove a value outside the fixture and expect `NotFound`
    pub fn test_remove_absent(&mut self) -> Result<()> {
        let absent = self.smallest_absent();
        let len = self.set.len();
        let root = self.set.state_root();

        match self.set.remove(&absent) {
            Err(SetError::NotFound { .. }) => {}
            Err(err) => return Err(err),
            Ok(_) => {
                return Err(SetError::invariant(format!(
                    "remove({absent}) succeeded on an absent value"
                )))
            }
        }

        ensure(self.set.len() == len, || {
            format!("count changed from {len} to {}", self.set.len())
        })?;
        ensure(self.set.state_root() == root, || {
            "failed remove changed the set".to_string()
        })
    }

    /// Remove then re-insert the target and expect the original state root
    pub fn test_round_trip(&mut self) -> Result<()> {
        let target = self.config.remove_target;
        let root = self.set.state_root();

        self.set.remove(&target)?;
        self.set.insert(target)?;

        ensure(self.set.state_root() == root, || {
            format!(
                "round trip of {target} changed the root to {}",
                self.set.state_root_hex()
            )
        })?;
        self.set.check_invariants()
    }

    /// Smallest `u64` not in the set, found by walking the ascending chain
    fn smallest_absent(&self) -> u64 {
        let mut candidate = 0u64;
        for value in &self.set {
            if *value != candidate {
                break;
            }
            candidate += 1;
        }
        candidate
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
