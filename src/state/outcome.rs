// Test outcome structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where a test case is defined. May be unavailable; formatting degrades
/// to name-only output when it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// File basename, lossy on non-UTF-8 paths.
    pub fn basename(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

/// Derived test status. Precedence: skip > error > fail > pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Error,
    Skip,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
            Self::Skip => "skip",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// One test case's result as delivered by the execution engine.
///
/// The engine reports raw flags; the reporter derives the status. A record
/// may carry several flags at once (an errored assertion is also a failure),
/// which is why `status()` applies precedence instead of trusting any single
/// flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    /// Fully-qualified test group (suite/class) name.
    pub group: String,
    /// Test case name within the group.
    pub name: String,
    /// Explicitly marked skipped.
    pub skipped: bool,
    /// Failed due to an unexpected/uncaught fault.
    pub errored: bool,
    /// Failed an assertion.
    pub failed: bool,
    /// Free-text failure/skip reason, when the engine captured one.
    pub message: Option<String>,
    pub location: Option<SourceLocation>,
}

impl TestOutcome {
    /// Create a pass outcome
    pub fn pass(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            skipped: false,
            errored: false,
            failed: false,
            message: None,
            location: None,
        }
    }

    /// Create a fail outcome
    pub fn fail(
        group: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            skipped: false,
            errored: false,
            failed: true,
            message: Some(message.into()),
            location: None,
        }
    }

    /// Create an error outcome
    pub fn error(
        group: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            skipped: false,
            errored: true,
            failed: true,
            message: Some(message.into()),
            location: None,
        }
    }

    /// Create a skip outcome
    pub fn skip(
        group: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            skipped: true,
            errored: false,
            failed: false,
            message: Some(reason.into()),
            location: None,
        }
    }

    pub fn with_location(mut self, file: impl Into<PathBuf>, line: u32) -> Self {
        self.location = Some(SourceLocation::new(file, line));
        self
    }

    /// Stable composite identity, unique per test case within a run.
    pub fn key(&self) -> String {
        format!("{}#{}", self.group, self.name)
    }

    /// Derive the status from the raw flags. Skip wins over error, error
    /// wins over fail.
    pub fn status(&self) -> TestStatus {
        if self.skipped {
            TestStatus::Skip
        } else if self.errored {
            TestStatus::Error
        } else if self.failed {
            TestStatus::Fail
        } else {
            TestStatus::Pass
        }
    }
}
