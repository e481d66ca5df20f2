//! Suite runner: `setUp` before each case, one outcome per case.

use tracing::{info, warn};

use crate::error::Result;
use crate::harness::{LinkedListTest, CONTRACT_NAME};

/// A test entry point on the fixture
pub type CaseFn = fn(&mut LinkedListTest) -> Result<()>;

/// Result of one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub name: &'static str,
    pub result: Result<()>,
}

impl CaseOutcome {
    #[inline]
    pub fn is_pass(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a suite run, in execution order
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every case passed
    ///
    /// An empty report counts as success.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Ordered list of named cases
#[derive(Debug, Clone, Default)]
pub struct Suite {
    cases: Vec<(&'static str, CaseFn)>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// `testRemove` followed by the error-path and round-trip cases
    pub fn standard() -> Self {
        Self::new()
            .case("testRemove", LinkedListTest::test_remove)
            .case("testInsertDuplicate", LinkedListTest::test_insert_duplicate)
            .case("testRemoveAbsent", LinkedListTest::test_remove_absent)
            .case("testRoundTrip", LinkedListTest::test_round_trip)
    }

    /// Append a case
    pub fn case(mut self, name: &'static str, run: CaseFn) -> Self {
        self.cases.push((name, run));
        self
    }

    /// Keep only the named cases; an empty filter keeps everything
    pub fn filter(mut self, names: &[String]) -> Self {
        if !names.is_empty() {
            self.cases.retain(|(name, _)| names.iter().any(|n| n == name));
        }
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cases.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run every case against a freshly set-up fixture
    ///
    /// A failing `setUp` is reported as that case's failure.
    pub fn run(&self, test: &mut LinkedListTest) -> SuiteReport {
        let mut report = SuiteReport::default();

        for &(name, run) in &self.cases {
            let result = test.set_up().and_then(|()| run(test));

            match &result {
                Ok(()) => info!(target: "harness", contract = CONTRACT_NAME, case = name, "pass"),
                Err(err) => {
                    warn!(target: "harness", contract = CONTRACT_NAME, case = name, %err, "fail")
                }
            }
            report.outcomes.push(CaseOutcome { name, result });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetError;
    use crate::harness::FixtureConfig;

    fn fixture() -> LinkedListTest {
        LinkedListTest::new(FixtureConfig::default()).unwrap()
    }

    #[test]
    fn test_standard_suite_passes() {
        let mut test = fixture();
        let report = Suite::standard().run(&mut test);

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.passed(), 4);
        assert!(report.is_success());
    }

    #[test]
    fn test_each_case_gets_fresh_set_up() {
        // testRemove twice would fail without a setUp between them
        let suite = Suite::new()
            .case("testRemove", LinkedListTest::test_remove)
            .case("testRemoveAgain", LinkedListTest::test_remove);
        let mut test = fixture();

        let report = suite.run(&mut test);
        assert!(report.is_success());
        assert_eq!(test.set().to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_failing_case_is_reported() {
        fn always_fails(_: &mut LinkedListTest) -> Result<()> {
            Err(SetError::invariant("forced"))
        }

        let suite = Suite::standard().case("forced", always_fails);
        let report = suite.run(&mut fixture());

        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        let last = report.outcomes.last().unwrap();
        assert_eq!(last.name, "forced");
        assert_eq!(last.result, Err(SetError::InvariantViolation("forced".into())));
    }

    #[test]
    fn test_filter() {
        let suite = Suite::standard().filter(&["testRemove".to_string()]);
        assert_eq!(suite.names().collect::<Vec<_>>(), vec!["testRemove"]);

        let all = Suite::standard().filter(&[]);
        assert_eq!(all.len(), 4);

        let none = Suite::standard().filter(&["missing".to_string()]);
        assert!(none.is_empty());
    }
}
