// LlmReporter - lifecycle orchestration over the collector, classifier,
// console renderer, regression analyzer and file writers

use std::io::Write;

use crate::config::ReporterConfig;
use crate::regression::{self, RegressionReport};
use crate::report::console::ConsoleRenderer;
use crate::report::summary::SummaryDocument;
use crate::report::Reporter;
use crate::snapshot;
use crate::state::{RunResults, Snapshot, TestOutcome};
use crate::time::{Clock, MonotonicClock};

/// The reporter. Construction loads the previous run's snapshot (when
/// regression tracking is enabled); `report()` renders the console view,
/// diffs against that fixed snapshot and persists the current one.
///
/// Nothing here returns an error to the engine: persistence failures are
/// swallowed at the write boundary and surfaced only on the diagnostic
/// channel when the debug flag is set.
pub struct LlmReporter {
    config: ReporterConfig,
    previous: Snapshot,
    results: RunResults,
    clock: Box<dyn Clock>,
    out: Box<dyn Write>,
    started_at: Option<f64>,
}

impl LlmReporter {
    /// Create a reporter writing to stdout with a real monotonic clock.
    pub fn new(config: ReporterConfig) -> Self {
        Self::with_output(config, Box::new(std::io::stdout()))
    }

    /// Create a reporter writing to an arbitrary sink.
    pub fn with_output(config: ReporterConfig, out: Box<dyn Write>) -> Self {
        Self::with_output_and_clock(config, out, Box::new(MonotonicClock::new()))
    }

    pub fn with_output_and_clock(
        config: ReporterConfig,
        out: Box<dyn Write>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let previous = if config.track_regressions {
            snapshot::load_or_empty(&config.results_file)
        } else {
            Snapshot::new()
        };

        Self {
            config,
            previous,
            results: RunResults::new(),
            clock,
            out,
            started_at: None,
        }
    }

    /// Recorded state for the current run.
    pub fn results(&self) -> &RunResults {
        &self.results
    }

    /// The baseline loaded at construction. Empty when there was no
    /// readable previous snapshot or tracking is disabled.
    pub fn previous_snapshot(&self) -> &Snapshot {
        &self.previous
    }

    fn elapsed_secs(&self) -> Option<f64> {
        self.started_at
            .map(|started| self.clock.monotonic_secs() - started)
    }

    // Regression analysis only applies once a baseline exists: a missing
    // or empty previous snapshot means no history, not zero regressions.
    fn analyze_regressions(&self, current: &Snapshot) -> Option<RegressionReport> {
        if self.previous.is_empty() {
            None
        } else {
            Some(regression::diff(current, &self.previous))
        }
    }

    fn persist(&self, current: &Snapshot, regressions: Option<&RegressionReport>) {
        if !self.config.write_reports {
            return;
        }

        if self.config.track_regressions {
            if let Err(err) = snapshot::save(&self.config.results_file, current) {
                if self.config.debug {
                    tracing::warn!(
                        "could not save regression results to {}: {}",
                        self.config.results_file.display(),
                        err
                    );
                }
            }
        }

        let document = SummaryDocument::build(&self.results, regressions, self.elapsed_secs());
        if let Err(err) = document.write(&self.config.report_file) {
            if self.config.debug {
                tracing::warn!(
                    "could not write summary to {}: {}",
                    self.config.report_file.display(),
                    err
                );
            }
        }
    }
}

impl Reporter for LlmReporter {
    fn start(&mut self) {
        self.started_at = Some(self.clock.monotonic_secs());
    }

    fn record(&mut self, outcome: TestOutcome) {
        self.results.record(outcome);
    }

    fn report(&mut self) {
        let current = self.results.snapshot();
        let regressions = self.analyze_regressions(&current);

        let renderer = ConsoleRenderer::new(self.config.format);
        let elapsed = self.elapsed_secs();
        if let Err(err) =
            renderer.render(&mut self.out, &self.results, regressions.as_ref(), elapsed)
        {
            if self.config.debug {
                tracing::warn!("console write failed: {}", err);
            }
        }

        self.persist(&current, regressions.as_ref());
    }
}
