// Report module - Console rendering and summary output

pub mod console;
pub mod format;
pub mod summary;

pub use console::ConsoleRenderer;
pub use summary::{SummaryDocument, SummaryError};

use crate::state::TestOutcome;

/// Lifecycle hooks the execution engine drives, in order: `start` once,
/// `record` once per completed test, `report` once at the end.
pub trait Reporter {
    /// Called when the run starts; captures the start timestamp
    fn start(&mut self);

    /// Called once per completed test, in completion order
    fn record(&mut self, outcome: TestOutcome);

    /// Called when the run ends; renders, diffs and persists. Never
    /// fails: a reporting problem must not fail the run it reports on.
    fn report(&mut self);
}
