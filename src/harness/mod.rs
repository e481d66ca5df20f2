//! Fixture harness for the ordered linked set.
//!
//! Models a contract-style test: a `setUp` entry point that rebuilds the
//! fixture, and test entry points such as `testRemove` that exercise the
//! set and report the first failed assertion as an error.
//!
//! ## Sequencing
//!
//! [`Suite::run`] calls [`LinkedListTest::set_up`] before every case, so no
//! state leaks from one case into the next.
//!
//! ## Example
//!
//! ```
//! use ordered_linked_set::{FixtureConfig, LinkedListTest, Suite};
//!
//! let mut test = LinkedListTest::new(FixtureConfig::default()).unwrap();
//! let report = Suite::standard().run(&mut test);
//!
//! assert!(report.is_success());
//! assert_eq!(report.passed(), 4);
//! ```

pub mod config;
pub mod fixture;
pub mod runner;

pub use config::FixtureConfig;
pub use fixture::{LinkedListTest, CONTRACT_NAME};
pub use runner::{CaseFn, CaseOutcome, Suite, SuiteReport};
