// Console rendering - compact (machine-greppable) and verbose modes

use std::io::Write;

use crate::config::Format;
use crate::regression::RegressionReport;
use crate::report::format;
use crate::state::{RunResults, TestOutcome};

/// Renders one finished run to a line-oriented sink.
///
/// Compact mode is a contract: the `R`/`REG`/`F`/`E`/`S` prefixes are
/// parsed by downstream tooling. Verbose mode is advisory, human-oriented
/// output.
pub struct ConsoleRenderer {
    mode: Format,
}

impl ConsoleRenderer {
    pub fn new(mode: Format) -> Self {
        Self { mode }
    }

    /// Render the run. Write errors propagate to the caller, which owns
    /// the swallow-and-log policy.
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        results: &RunResults,
        regressions: Option<&RegressionReport>,
        duration_secs: Option<f64>,
    ) -> std::io::Result<()> {
        match self.mode {
            Format::Compact => self.render_compact(out, results, regressions, duration_secs),
            Format::Verbose => self.render_verbose(out, results, regressions, duration_secs),
        }
    }

    fn render_compact<W: Write>(
        &self,
        out: &mut W,
        results: &RunResults,
        regressions: Option<&RegressionReport>,
        duration_secs: Option<f64>,
    ) -> std::io::Result<()> {
        writeln!(
            out,
            "R t{} d{} p{} f{} e{} s{}",
            results.total(),
            format::duration(duration_secs),
            results.passes(),
            results.failed().len(),
            results.errored().len(),
            results.skipped().len(),
        )?;

        if let Some(report) = regressions {
            if !report.is_empty() {
                writeln!(
                    out,
                    "REG +{} -{}",
                    report.new_failures.len(),
                    report.fixes.len()
                )?;
            }
        }

        for outcome in results.failed() {
            writeln!(out, "F {}", format::test_location_compact(outcome))?;
        }
        for outcome in results.errored() {
            writeln!(out, "E {}", format::test_location_compact(outcome))?;
        }
        for outcome in results.skipped() {
            writeln!(out, "S {}", format::test_location_compact(outcome))?;
        }

        Ok(())
    }

    fn render_verbose<W: Write>(
        &self,
        out: &mut W,
        results: &RunResults,
        regressions: Option<&RegressionReport>,
        duration_secs: Option<f64>,
    ) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "🏃 {} tests ({})",
            results.total(),
            format::duration(duration_secs)
        )?;

        if results.passes() > 0 {
            writeln!(out, "✅ {}", results.passes())?;
        }

        if let Some(report) = regressions {
            if !report.new_failures.is_empty() {
                writeln!(
                    out,
                    "✅➡️❌ {}: {}",
                    report.new_failures.len(),
                    report.new_failures.join(", ")
                )?;
            }
            if !report.fixes.is_empty() {
                writeln!(out, "🎉 {}: {}", report.fixes.len(), report.fixes.join(", "))?;
            }
        }

        let failed = results.failed();
        if !failed.is_empty() {
            let locations: Vec<String> = failed.iter().map(|o| format::test_location(o)).collect();
            writeln!(out, "❌ {} failed: {}", failed.len(), locations.join(", "))?;
        }

        let errored = results.errored();
        if !errored.is_empty() {
            let locations: Vec<String> = errored.iter().map(|o| format::test_location(o)).collect();
            writeln!(out, "💥 {}: {}", errored.len(), locations.join(", "))?;
        }

        let skipped = results.skipped();
        if !skipped.is_empty() {
            writeln!(out, "⏭️  {} skipped:", skipped.len())?;
            for outcome in &skipped {
                writeln!(
                    out,
                    "    - {}: {}",
                    format::test_location(outcome),
                    format::clean_message(outcome.message.as_deref())
                )?;
            }
        }

        if !failed.is_empty() || !errored.is_empty() {
            self.render_details(out, &failed, &errored)?;
        }

        Ok(())
    }

    // One stanza per failed then per errored test. The partitions are
    // disjoint by status precedence, so nothing prints twice.
    fn render_details<W: Write>(
        &self,
        out: &mut W,
        failed: &[&TestOutcome],
        errored: &[&TestOutcome],
    ) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "📋 Details:")?;
        writeln!(out, "{}", "-".repeat(40))?;

        for (icon, outcomes) in [("❌", failed), ("💥", errored)] {
            for outcome in outcomes {
                writeln!(out, "{} {}", icon, outcome.name)?;
                writeln!(out, "   {}", format::bare_location(outcome))?;
                writeln!(out, "   {}", format::clean_message(outcome.message.as_deref()))?;
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: Format, results: &RunResults, regressions: Option<&RegressionReport>) -> String {
        let mut buffer = Vec::new();
        ConsoleRenderer::new(mode)
            .render(&mut buffer, results, regressions, Some(0.5))
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    fn sample_run() -> RunResults {
        let mut results = RunResults::new();
        results.record(TestOutcome::pass("UserTest", "test_login"));
        results.record(
            TestOutcome::fail("UserTest", "test_logout", "expected redirect\nbacktrace")
                .with_location("spec/user_test.rb", 31),
        );
        results.record(TestOutcome::error("JobTest", "test_enqueue", "NoMethodError"));
        results.record(TestOutcome::skip("JobTest", "test_retry", "flaky"));
        results
    }

    #[test]
    fn test_compact_summary_line() {
        let output = render(Format::Compact, &sample_run(), None);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "R t4 d500ms p1 f1 e1 s1");
    }

    #[test]
    fn test_compact_category_lines() {
        let output = render(Format::Compact, &sample_run(), None);
        assert!(output.contains("F user_test.rb:31 logout"));
        assert!(output.contains("E enqueue"));
        assert!(output.contains("S retry"));
    }

    #[test]
    fn test_compact_regression_line_only_when_nonzero() {
        let silent = RegressionReport::default();
        let output = render(Format::Compact, &sample_run(), Some(&silent));
        assert!(!output.contains("REG"));

        let noisy = RegressionReport {
            new_failures: vec!["logout@UserTest".to_string()],
            fixes: vec![],
        };
        let output = render(Format::Compact, &sample_run(), Some(&noisy));
        assert!(output.contains("REG +1 -0"));
    }

    #[test]
    fn test_verbose_header_and_sections() {
        let output = render(Format::Verbose, &sample_run(), None);
        assert!(output.contains("🏃 4 tests (500ms)"));
        assert!(output.contains("✅ 1"));
        assert!(output.contains("❌ 1 failed: logout@user_test.rb:31"));
        assert!(output.contains("💥 1: enqueue"));
        assert!(output.contains("⏭️  1 skipped:"));
        assert!(output.contains("    - retry: flaky"));
        assert!(output.contains("📋 Details:"));
        assert!(output.contains("   expected redirect"));
    }

    #[test]
    fn test_verbose_error_stanza_appears_once() {
        let output = render(Format::Verbose, &sample_run(), None);
        assert_eq!(output.matches("💥 test_enqueue").count(), 1);
    }

    #[test]
    fn test_verbose_empty_run_has_only_header() {
        let output = render(Format::Verbose, &RunResults::new(), None);
        assert!(output.contains("🏃 0 tests"));
        assert!(!output.contains("✅"));
        assert!(!output.contains("📋 Details:"));
    }
}
