// Configuration handling
// Explicit options merged with an environment snapshot; no config files

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable naming the results snapshot path
pub const ENV_RESULTS_FILE: &str = "LLM_REPORTER_RESULTS";
/// Environment variable naming the summary document path
pub const ENV_REPORT_FILE: &str = "LLM_REPORTER_TOML";
/// Environment variable overriding the console format
pub const ENV_FORMAT: &str = "LLM_REPORTER_FORMAT";
/// Presence enables diagnostic logging of swallowed write failures
pub const ENV_DEBUG: &str = "DEBUG";

pub fn default_results_file() -> PathBuf {
    PathBuf::from("tmp/test_results.json")
}

pub fn default_report_file() -> PathBuf {
    PathBuf::from("tmp/test_report.toml")
}

/// Console output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Compact,
    Verbose,
}

impl FromStr for Format {
    type Err = ();

    /// Case-insensitive; anything unrecognized falls back to compact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            _ => Ok(Self::Compact),
        }
    }
}

/// Explicit construction-time options. Unset fields fall back to the
/// environment, then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct ReporterOptions {
    pub results_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub format: Option<Format>,
    pub track_regressions: Option<bool>,
    pub write_reports: Option<bool>,
}

/// A captured view of the process environment. Resolution never touches
/// `std::env` directly, so precedence is unit-testable.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the real process environment
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Effective configuration after resolution
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Where the previous/current snapshot is read/written
    pub results_file: PathBuf,
    /// Where the structured summary is written
    pub report_file: PathBuf,
    pub format: Format,
    /// Enable previous-snapshot load and regression diffing
    pub track_regressions: bool,
    /// Enable writing the snapshot and summary files
    pub write_reports: bool,
    /// Log swallowed persistence failures
    pub debug: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        resolve(ReporterOptions::default(), &EnvSnapshot::default())
    }
}

impl ReporterConfig {
    /// Resolve against the real process environment
    pub fn from_env(options: ReporterOptions) -> Self {
        resolve(options, &EnvSnapshot::capture())
    }
}

/// Merge explicit options with an environment snapshot.
/// Precedence: explicit option > environment variable > built-in default.
pub fn resolve(options: ReporterOptions, env: &EnvSnapshot) -> ReporterConfig {
    let results_file = options
        .results_file
        .or_else(|| env.get(ENV_RESULTS_FILE).map(PathBuf::from))
        .unwrap_or_else(default_results_file);

    let report_file = options
        .report_file
        .or_else(|| env.get(ENV_REPORT_FILE).map(PathBuf::from))
        .unwrap_or_else(default_report_file);

    let format = options
        .format
        .or_else(|| env.get(ENV_FORMAT).map(|s| s.parse().unwrap_or_default()))
        .unwrap_or_default();

    ReporterConfig {
        results_file,
        report_file,
        format,
        track_regressions: options.track_regressions.unwrap_or(true),
        write_reports: options.write_reports.unwrap_or(true),
        debug: env.get(ENV_DEBUG).is_some(),
    }
}
