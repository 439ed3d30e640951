// State module - Test run state management
// Accumulates per-test outcomes and classifies them at report time

pub mod outcome;

pub use outcome::{SourceLocation, TestOutcome, TestStatus};

use indexmap::IndexMap;

/// The identity→status mapping for one run, as persisted and diffed.
pub type Snapshot = IndexMap<String, TestStatus>;

/// Recorded outcomes for the current run, keyed by test identity.
///
/// Recording the same identity twice overwrites the earlier entry (last
/// write wins), so the classifier counts each test once and the arithmetic
/// identity `passes + fails + errors + skips == total` holds for any input.
/// Iteration order is insertion order, which is significant for display.
#[derive(Debug, Clone, Default)]
pub struct RunResults {
    outcomes: IndexMap<String, TestOutcome>,
}

impl RunResults {
    /// Create empty run results
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one outcome, overwriting any earlier outcome with the same
    /// identity.
    pub fn record(&mut self, outcome: TestOutcome) {
        self.outcomes.insert(outcome.key(), outcome);
    }

    /// Get total recorded tests
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.values()
    }

    /// Failed tests (assertion failures only, not errors or skips).
    pub fn failed(&self) -> Vec<&TestOutcome> {
        self.with_status(TestStatus::Fail)
    }

    /// Errored tests (unexpected faults).
    pub fn errored(&self) -> Vec<&TestOutcome> {
        self.with_status(TestStatus::Error)
    }

    /// Skipped tests.
    pub fn skipped(&self) -> Vec<&TestOutcome> {
        self.with_status(TestStatus::Skip)
    }

    /// Passed count. Derived, not counted directly: the partitions are
    /// disjoint so the difference is exact, including for the empty run.
    pub fn passes(&self) -> usize {
        self.total() - self.failed().len() - self.errored().len() - self.skipped().len()
    }

    /// Derive the current snapshot in insertion order.
    pub fn snapshot(&self) -> Snapshot {
        self.outcomes
            .iter()
            .map(|(key, outcome)| (key.clone(), outcome.status()))
            .collect()
    }

    fn with_status(&self, status: TestStatus) -> Vec<&TestOutcome> {
        self.outcomes
            .values()
            .filter(|o| o.status() == status)
            .collect()
    }
}
