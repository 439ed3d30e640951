// Summary document - structured run summary in a minimal key-value markup
//
// Consumers parse the output as generic `[section]` / `key = value`
// documents, so the writer renders the markup by hand rather than binding
// to a serializer's escaping and ordering choices.

use std::fs;
use std::path::Path;

use crate::regression::RegressionReport;
use crate::report::format;
use crate::state::RunResults;

/// Failure classes at the summary write boundary. Mapped to log-and-continue
/// by the reporter, never raised further.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("summary I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One rendered value. Strings and string arrays are quoted and escaped;
/// numbers and booleans render bare.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

/// Ordered sections of ordered key-value pairs.
#[derive(Debug, Clone, Default)]
pub struct SummaryDocument {
    sections: Vec<(String, Vec<(String, Value)>)>,
}

impl SummaryDocument {
    /// Assemble the document for one finished run. The `regressions`
    /// section appears only when a previous snapshot existed.
    pub fn build(
        results: &RunResults,
        regressions: Option<&RegressionReport>,
        duration_secs: Option<f64>,
    ) -> Self {
        let failed = results.failed();
        let errored = results.errored();
        let skipped = results.skipped();

        let mut doc = Self::default();

        doc.push_section(
            "summary",
            vec![
                ("tests".into(), Value::Int(results.total() as i64)),
                ("passes".into(), Value::Int(results.passes() as i64)),
                ("failures".into(), Value::Int(failed.len() as i64)),
                ("errors".into(), Value::Int(errored.len() as i64)),
                ("skips".into(), Value::Int(skipped.len() as i64)),
                ("time_s".into(), Value::Float(duration_secs.unwrap_or(0.0))),
            ],
        );

        doc.push_section(
            "details",
            vec![
                (
                    "failed".into(),
                    Value::List(failed.iter().map(|o| format::test_location(o)).collect()),
                ),
                (
                    "errors".into(),
                    Value::List(errored.iter().map(|o| format::test_location(o)).collect()),
                ),
                (
                    "skipped".into(),
                    Value::List(
                        skipped
                            .iter()
                            .map(|o| {
                                format!(
                                    "{}: {}",
                                    format::test_location(o),
                                    format::clean_message(o.message.as_deref())
                                )
                            })
                            .collect(),
                    ),
                ),
            ],
        );

        if let Some(report) = regressions {
            doc.push_section(
                "regressions",
                vec![
                    ("new_failures".into(), Value::List(report.new_failures.clone())),
                    ("fixes".into(), Value::List(report.fixes.clone())),
                ],
            );
        }

        doc
    }

    fn push_section(&mut self, name: &str, entries: Vec<(String, Value)>) {
        self.sections.push((name.to_string(), entries));
    }

    /// Render the markup: bracketed section headers, one `key = value`
    /// per line, a blank line after each section.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for (section, entries) in &self.sections {
            lines.push(format!("[{}]", section));
            for (key, value) in entries {
                lines.push(format!("{} = {}", key, render_value(value)));
            }
            lines.push(String::new());
        }
        lines.join("\n")
    }

    /// Write the rendered document, creating the containing directory.
    pub fn write(&self, path: &Path) -> Result<(), SummaryError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.render())?;
        Ok(())
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("\"{}\"", escape(s)),
        Value::Int(n) => n.to_string(),
        // Debug formatting keeps the decimal point, so floats stay floats
        // for a TOML-ish parser.
        Value::Float(f) if f.is_finite() => format!("{:?}", f),
        Value::Float(_) => "0.0".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::List(items) => {
            let quoted: Vec<String> = items.iter().map(|s| format!("\"{}\"", escape(s))).collect();
            format!("[{}]", quoted.join(", "))
        }
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TestOutcome;

    #[test]
    fn test_summary_section_counts() {
        let mut results = RunResults::new();
        results.record(TestOutcome::pass("T", "test_a"));
        results.record(TestOutcome::fail("T", "test_b", "nope"));

        let doc = SummaryDocument::build(&results, None, Some(1.5));
        let rendered = doc.render();

        assert!(rendered.starts_with("[summary]\n"));
        assert!(rendered.contains("tests = 2"));
        assert!(rendered.contains("passes = 1"));
        assert!(rendered.contains("failures = 1"));
        assert!(rendered.contains("errors = 0"));
        assert!(rendered.contains("time_s = 1.5"));
        assert!(!rendered.contains("[regressions]"));
    }

    #[test]
    fn test_details_lists() {
        let mut results = RunResults::new();
        results.record(
            TestOutcome::fail("T", "test_b", "nope").with_location("spec/t_test.rb", 9),
        );
        results.record(TestOutcome::skip("T", "test_c", "later"));

        let rendered = SummaryDocument::build(&results, None, None).render();
        assert!(rendered.contains("failed = [\"b@t_test.rb:9\"]"));
        assert!(rendered.contains("errors = []"));
        assert!(rendered.contains("skipped = [\"c: later\"]"));
    }

    #[test]
    fn test_regressions_section_when_history_exists() {
        let results = RunResults::new();
        let report = RegressionReport {
            new_failures: vec!["b@T".to_string()],
            fixes: vec![],
        };

        let rendered = SummaryDocument::build(&results, Some(&report), None).render();
        assert!(rendered.contains("[regressions]"));
        assert!(rendered.contains("new_failures = [\"b@T\"]"));
        assert!(rendered.contains("fixes = []"));
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(
            render_value(&Value::Str("say \"hi\" \\ bye".to_string())),
            "\"say \\\"hi\\\" \\\\ bye\""
        );
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(render_value(&Value::Int(7)), "7");
        assert_eq!(render_value(&Value::Bool(true)), "true");
        assert_eq!(render_value(&Value::Float(2.0)), "2.0");
        assert_eq!(render_value(&Value::Float(f64::NAN)), "0.0");
    }

    #[test]
    fn test_rendered_document_is_parseable_toml() {
        let mut results = RunResults::new();
        results.record(TestOutcome::pass("T", "test_a"));
        let rendered = SummaryDocument::build(&results, None, Some(0.25)).render();

        let parsed: toml::Value = rendered.parse().expect("summary should parse as TOML");
        assert_eq!(parsed["summary"]["tests"].as_integer(), Some(1));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let doc = SummaryDocument::build(&RunResults::new(), None, None);
        let result = doc.write(&blocker.join("report.toml"));
        assert!(matches!(result, Err(SummaryError::Io(_))));
    }
}
