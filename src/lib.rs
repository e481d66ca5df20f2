//! # Ordered Linked Set
//!
//! A set of unique, ascending values stored as a slab-backed linked chain,
//! together with the `LinkedListTest` fixture harness that drives it through
//! `setUp` and `testRemove`.
//!
//! ## Architecture
//!
//! - **List**: [`OrderedLinkedSet`] with slab-allocated nodes linked by key
//! - **Harness**: [`LinkedListTest`] fixture and the [`Suite`] runner
//! - **Error**: [`SetError`] shared by both
//!
//! ## Example
//!
//! ```
//! use ordered_linked_set::{FixtureConfig, LinkedListTest};
//!
//! let mut test = LinkedListTest::new(FixtureConfig::default()).unwrap();
//! test.set_up().unwrap();
//! test.test_remove().unwrap();
//!
//! assert_eq!(test.set().to_vec(), vec![1, 3]);
//! ```

/// Error type and result alias
pub mod error;

/// Ordered linked set with slab-based storage
pub mod list;

/// `setUp` / `testRemove` fixture harness
pub mod harness;

pub use error::{Result, SetError};
pub use harness::{CaseOutcome, FixtureConfig, LinkedListTest, Suite, SuiteReport, CONTRACT_NAME};
pub use list::{OrderedLinkedSet, RootBytes};
