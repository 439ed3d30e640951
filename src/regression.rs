// Regression analysis - diff the current snapshot against the previous run

use crate::report::format::humanize;
use crate::state::Snapshot;

/// Tests whose pass/fail status changed between two runs.
///
/// Entries are display-formatted as `humanized-name@group` — snapshot
/// entries carry no source location, so the group name stands in for
/// file:line here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegressionReport {
    /// Passed before, no longer passing
    pub new_failures: Vec<String>,
    /// Not passing before, passing now
    pub fixes: Vec<String>,
}

impl RegressionReport {
    pub fn is_empty(&self) -> bool {
        self.new_failures.is_empty() && self.fixes.is_empty()
    }
}

/// Compare the current snapshot against the previous one, in the current
/// snapshot's iteration order. Identities with no previous entry have no
/// baseline and are ignored.
pub fn diff(current: &Snapshot, previous: &Snapshot) -> RegressionReport {
    let mut report = RegressionReport::default();

    for (key, status) in current {
        let Some(previous_status) = previous.get(key) else {
            continue;
        };

        if previous_status.is_pass() && !status.is_pass() {
            report.new_failures.push(key_to_display(key));
        } else if !previous_status.is_pass() && status.is_pass() {
            report.fixes.push(key_to_display(key));
        }
    }

    report
}

/// `"Group#test_case_name"` → `"case name@Group"`.
fn key_to_display(key: &str) -> String {
    match key.split_once('#') {
        Some((group, name)) => format!("{}@{}", humanize(name), group),
        None => humanize(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TestStatus;

    fn snapshot(entries: &[(&str, TestStatus)]) -> Snapshot {
        entries
            .iter()
            .map(|(k, s)| (k.to_string(), *s))
            .collect()
    }

    #[test]
    fn test_new_failure_and_fix() {
        let previous = snapshot(&[
            ("T#test_a", TestStatus::Pass),
            ("T#test_b", TestStatus::Fail),
        ]);
        let current = snapshot(&[
            ("T#test_a", TestStatus::Fail),
            ("T#test_b", TestStatus::Pass),
        ]);

        let report = diff(&current, &previous);
        assert_eq!(report.new_failures, vec!["a@T"]);
        assert_eq!(report.fixes, vec!["b@T"]);
    }

    #[test]
    fn test_error_counts_as_new_failure() {
        let previous = snapshot(&[("T#test_a", TestStatus::Pass)]);
        let current = snapshot(&[("T#test_a", TestStatus::Error)]);
        assert_eq!(diff(&current, &previous).new_failures, vec!["a@T"]);
    }

    #[test]
    fn test_unknown_identity_is_not_a_regression() {
        let previous = snapshot(&[("T#test_a", TestStatus::Pass)]);
        let current = snapshot(&[("T#test_brand_new", TestStatus::Fail)]);
        assert!(diff(&current, &previous).is_empty());
    }

    #[test]
    fn test_identical_runs_have_no_regressions() {
        let entries = [
            ("T#test_a", TestStatus::Pass),
            ("T#test_b", TestStatus::Fail),
            ("T#test_c", TestStatus::Skip),
        ];
        let report = diff(&snapshot(&entries), &snapshot(&entries));
        assert!(report.is_empty());
    }

    #[test]
    fn test_display_format_humanizes_the_case_name() {
        let previous = snapshot(&[("UserTest#test_the_title_renders", TestStatus::Pass)]);
        let current = snapshot(&[("UserTest#test_the_title_renders", TestStatus::Fail)]);
        assert_eq!(
            diff(&current, &previous).new_failures,
            vec!["the title renders@UserTest"]
        );
    }
}
